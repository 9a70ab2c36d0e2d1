//! Perspective camera that chases the pointer and always looks at the origin.

use crate::constants::*;
use crate::pointer::PointerReading;
use glam::{Mat4, Vec3};

/// Right-handed perspective camera, usable on both native and web targets.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera in its initial hero-scene position: backed off along +Z,
    /// aimed at the origin.
    pub fn hero(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Ease the eye toward the pointer-implied position and re-aim at the
    /// origin. Exponential smoothing: the eye approaches but never crosses
    /// the target under a constant reading.
    pub fn ease_toward_pointer(&mut self, pointer: PointerReading) {
        self.eye.x += (pointer.x * CAMERA_TARGET_X_SCALE - self.eye.x) * CAMERA_EASE;
        self.eye.y += (pointer.y * CAMERA_TARGET_Y_SCALE - self.eye.y) * CAMERA_EASE;
        self.target = Vec3::ZERO;
    }

    pub fn set_aspect(&mut self, width: f32, height: f32) {
        self.aspect = width / height.max(1.0);
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
