//! The per-frame update: advance the scene clock, derive every entity's
//! displayed transform from (elapsed time, latest pointer reading), and hand
//! the result to the renderer as an immutable snapshot.
//!
//! The animator owns no GPU objects. Each `advance` call mutates only the
//! derived transform state (batch rotation, shape rotations, camera eye) and
//! returns a [`FrameTransforms`] for a separate apply-to-backend step, which
//! keeps the math testable without a rendering backend.

use crate::camera::Camera;
use crate::constants::*;
use crate::pointer::PointerReading;
use crate::scene::{Scene, SceneParams};
use glam::{EulerRot, Mat4, Vec2, Vec3};
use rand::Rng;

/// One exponential smoothing step: `x += (target - x) * k`, k in (0, 1).
#[inline]
pub fn ease(current: f32, target: f32, k: f32) -> f32 {
    current + (target - current) * k
}

/// Displayed position of shape `index` at elapsed time `t`: the fixed
/// initial position plus per-axis periodic drift plus a pointer-proportional
/// X/Y offset. Pure function of its inputs.
pub fn shape_float_position(
    initial: Vec3,
    t: f32,
    index: usize,
    pointer: PointerReading,
) -> Vec3 {
    let i = index as f32;
    Vec3::new(
        initial.x + (FLOAT_FREQ_X * t + i).sin() * FLOAT_AMP_X + pointer.x * POINTER_SHAPE_OFFSET,
        initial.y + (FLOAT_FREQ_Y * t + i).cos() * FLOAT_AMP_Y + pointer.y * POINTER_SHAPE_OFFSET,
        initial.z + (FLOAT_FREQ_Z * t + FLOAT_Z_PHASE_PER_INDEX * i).sin() * FLOAT_AMP_Z,
    )
}

/// Per-shape transform for one frame.
#[derive(Clone, Copy, Debug)]
pub struct ShapeTransform {
    pub model: Mat4,
    pub color: [f32; 3],
}

/// Immutable per-frame snapshot consumed by the renderer.
pub struct FrameTransforms {
    pub time: f32,
    pub particle_model: Mat4,
    pub shapes: Vec<ShapeTransform>,
    pub light_positions: [Vec3; 2],
    pub camera_eye: Vec3,
    pub view: Mat4,
    pub proj: Mat4,
}

/// Two-state animator: Uninitialized until `init`, Running until `destroy`.
/// There is no paused state here; pausing belongs to the orchestration layer.
pub struct SceneAnimator {
    scene: Option<Scene>,
    camera: Camera,
    time: f32,
}

impl Default for SceneAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneAnimator {
    pub fn new() -> Self {
        Self {
            scene: None,
            camera: Camera::hero(1.0),
            time: 0.0,
        }
    }

    /// Build the scene for the given viewport. Idempotent: a second call
    /// while running is a no-op and leaves all entity state untouched.
    pub fn init(&mut self, viewport_w: f32, viewport_h: f32, rng: &mut impl Rng) {
        if self.scene.is_some() {
            return;
        }
        let params = SceneParams::for_viewport(viewport_w);
        let scene = Scene::generate(params, rng);
        log::info!(
            "[scene] particles={} shapes={} viewport={}x{}",
            scene.particles.instances.len(),
            scene.shapes.len(),
            viewport_w,
            viewport_h
        );
        self.scene = Some(scene);
        self.camera = Camera::hero(viewport_w / viewport_h.max(1.0));
        self.time = 0.0;
    }

    pub fn is_running(&self) -> bool {
        self.scene.is_some()
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    /// Advance one frame: fixed nominal time step, then derive every
    /// entity's transform from the new time and the latest pointer reading.
    /// Returns `None` while uninitialized.
    pub fn advance(&mut self, pointer: PointerReading) -> Option<FrameTransforms> {
        let scene = self.scene.as_mut()?;
        self.time += FRAME_STEP_SEC;
        let t = self.time;

        let particles = &mut scene.particles;
        particles.rotation = Vec2::new(
            ease(
                particles.rotation.x,
                pointer.y * PARTICLE_ROT_TARGET_SCALE,
                PARTICLE_ROT_EASE,
            ),
            ease(
                particles.rotation.y,
                pointer.x * PARTICLE_ROT_TARGET_SCALE,
                PARTICLE_ROT_EASE,
            ),
        );
        let particle_model = Mat4::from_euler(
            EulerRot::XYZ,
            particles.rotation.x,
            particles.rotation.y,
            0.0,
        );

        let shapes = scene
            .shapes
            .iter_mut()
            .enumerate()
            .map(|(i, shape)| {
                shape.rotation += shape.rotation_speed;
                let position = shape_float_position(shape.initial_position, t, i, pointer);
                ShapeTransform {
                    model: Mat4::from_translation(position)
                        * Mat4::from_euler(
                            EulerRot::XYZ,
                            shape.rotation.x,
                            shape.rotation.y,
                            shape.rotation.z,
                        ),
                    color: shape.color,
                }
            })
            .collect();

        let light_positions = [
            scene.lights[0].position_at(t),
            scene.lights[1].position_at(t),
        ];

        self.camera.ease_toward_pointer(pointer);

        Some(FrameTransforms {
            time: t,
            particle_model,
            shapes,
            light_positions,
            camera_eye: self.camera.eye,
            view: self.camera.view_matrix(),
            proj: self.camera.projection_matrix(),
        })
    }

    /// Update the camera aspect for a new surface size. Entity counts chosen
    /// at init are not revisited, even across the mobile/desktop threshold.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.camera.set_aspect(width, height);
    }

    /// Drop all entities and return to Uninitialized. The animator must be
    /// fully re-initialized before it can run again.
    pub fn destroy(&mut self) {
        if let Some(scene) = self.scene.take() {
            log::info!(
                "[scene] destroyed: released {} particles and {} shapes",
                scene.particles.instances.len(),
                scene.shapes.len()
            );
        }
        self.time = 0.0;
    }
}
