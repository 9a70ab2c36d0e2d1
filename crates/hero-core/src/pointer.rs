//! Latest pointer position, normalized to viewport-centered coordinates.
//!
//! Input handlers overwrite the reading on every move event; the frame loop
//! only ever sees the last value written. Smoothing toward the reading is
//! done by the animator, never here.

/// Normalized pointer position: both axes in [-1, 1], (0, 0) at the viewport
/// center, right/up positive.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerReading {
    pub x: f32,
    pub y: f32,
}

impl PointerReading {
    /// Normalize raw client coordinates against the viewport size.
    ///
    /// A zero viewport dimension is not guarded; the non-finite reading
    /// persists until the next move event replaces it.
    pub fn normalize(client_x: f32, client_y: f32, viewport_w: f32, viewport_h: f32) -> Self {
        Self {
            x: (client_x / viewport_w) * 2.0 - 1.0,
            y: -(client_y / viewport_h) * 2.0 + 1.0,
        }
    }
}
