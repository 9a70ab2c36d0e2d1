//! Scene entities: the particle batch, the floating solids, and the lights.
//!
//! Entity counts and every static parameter are fixed when the scene is
//! generated. The only state mutated afterwards is derived transform data:
//! the batch's eased rotation and each shape's accumulated rotation.

use crate::color::hsl_to_rgb;
use crate::constants::*;
use glam::{Vec2, Vec3};
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, PI};

/// Counts selected once from the viewport width at construction time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SceneParams {
    pub particle_count: usize,
    pub shape_count: usize,
}

impl SceneParams {
    pub fn for_viewport(width_px: f32) -> Self {
        if width_px < MOBILE_WIDTH_THRESHOLD {
            Self {
                particle_count: PARTICLES_MOBILE,
                shape_count: SHAPES_MOBILE,
            }
        } else {
            Self {
                particle_count: PARTICLES_DESKTOP,
                shape_count: SHAPES_DESKTOP,
            }
        }
    }
}

/// Per-point static data, laid out for direct upload as an instance buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 3],
    pub _pad: f32,
}

/// A single point cloud sharing one time-varying wave displacement,
/// evaluated in the vertex shader. No per-particle mutable state exists
/// outside the static instance array.
pub struct ParticleBatch {
    pub instances: Vec<ParticleInstance>,
    /// Eased toward `(pointer.y, pointer.x) * PARTICLE_ROT_TARGET_SCALE`.
    pub rotation: Vec2,
}

impl ParticleBatch {
    pub fn generate(count: usize, rng: &mut impl Rng) -> Self {
        let mut instances = Vec::with_capacity(count);
        for _ in 0..count {
            let draw: f32 = rng.gen();
            let color = if draw < 0.33 {
                PALETTE[0]
            } else if draw < 0.66 {
                PALETTE[1]
            } else {
                PALETTE[2]
            };
            instances.push(ParticleInstance {
                position: [
                    (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD_XY,
                    (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD_XY,
                    (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD_Z,
                ],
                size: rng.gen::<f32>() * PARTICLE_SIZE_SPAN + PARTICLE_SIZE_MIN,
                color,
                _pad: 0.0,
            });
        }
        Self {
            instances,
            rotation: Vec2::ZERO,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeKind {
    Sphere { radius: f32 },
    Cuboid { x: f32, y: f32, z: f32 },
    Cone { radius: f32, height: f32 },
}

/// Decorative solid with autonomous rotation and a pointer-influenced
/// position offset. Everything except `rotation` is fixed at creation.
#[derive(Clone, Debug)]
pub struct FloatingShape {
    pub kind: ShapeKind,
    pub color: [f32; 3],
    pub initial_position: Vec3,
    /// Accumulates per-axis speed every frame, unbounded by design.
    pub rotation: Vec3,
    pub rotation_speed: Vec3,
}

impl FloatingShape {
    pub fn generate(rng: &mut impl Rng) -> Self {
        let kind = match rng.gen_range(0..3) {
            0 => ShapeKind::Sphere {
                radius: rng.gen::<f32>() * SPHERE_RADIUS_SPAN + SPHERE_RADIUS_MIN,
            },
            1 => ShapeKind::Cuboid {
                x: rng.gen::<f32>() * CUBOID_EDGE_SPAN + CUBOID_EDGE_MIN,
                y: rng.gen::<f32>() * CUBOID_EDGE_SPAN + CUBOID_EDGE_MIN,
                z: rng.gen::<f32>() * CUBOID_EDGE_SPAN + CUBOID_EDGE_MIN,
            },
            _ => ShapeKind::Cone {
                radius: rng.gen::<f32>() * CONE_RADIUS_SPAN + CONE_RADIUS_MIN,
                height: rng.gen::<f32>() * CONE_HEIGHT_SPAN + CONE_HEIGHT_MIN,
            },
        };
        Self {
            kind,
            color: hsl_to_rgb(
                rng.gen::<f32>() * SHAPE_HUE_SPAN + SHAPE_HUE_MIN,
                SHAPE_SATURATION,
                SHAPE_LIGHTNESS,
            ),
            initial_position: Vec3::new(
                (rng.gen::<f32>() - 0.5) * SHAPE_SPREAD_X,
                (rng.gen::<f32>() - 0.5) * SHAPE_SPREAD_Y,
                (rng.gen::<f32>() - 0.5) * SHAPE_SPREAD_Z,
            ),
            rotation: Vec3::new(
                rng.gen::<f32>() * PI,
                rng.gen::<f32>() * PI,
                rng.gen::<f32>() * PI,
            ),
            rotation_speed: Vec3::new(
                (rng.gen::<f32>() - 0.5) * SHAPE_ROT_SPEED_SPAN,
                (rng.gen::<f32>() - 0.5) * SHAPE_ROT_SPEED_SPAN,
                (rng.gen::<f32>() - 0.5) * SHAPE_ROT_SPEED_SPAN,
            ),
        }
    }
}

/// Point light circling the scene in the XZ plane at a fixed height.
/// Position is a function of elapsed time only; pointer input never reaches
/// the lights.
#[derive(Clone, Copy, Debug)]
pub struct OrbitLight {
    pub color: [f32; 3],
    pub intensity: f32,
    pub range: f32,
    pub height: f32,
    pub radius_x: f32,
    pub radius_z: f32,
    pub angular_speed: f32,
    pub phase_x: f32,
    pub phase_z: f32,
}

impl OrbitLight {
    pub fn position_at(&self, time: f32) -> Vec3 {
        Vec3::new(
            (self.angular_speed * time + self.phase_x).sin() * self.radius_x,
            self.height,
            (self.angular_speed * time + self.phase_z).cos() * self.radius_z,
        )
    }
}

/// The two animated point lights, antiphase relative to each other.
pub fn orbit_lights() -> [OrbitLight; 2] {
    [
        // x = sin(0.7t)*30, z = cos(0.7t)*20
        OrbitLight {
            color: PALETTE[1],
            intensity: POINT_LIGHT_INTENSITY,
            range: POINT_LIGHT_RANGE,
            height: 20.0,
            radius_x: 30.0,
            radius_z: 20.0,
            angular_speed: 0.7,
            phase_x: 0.0,
            phase_z: 0.0,
        },
        // x = cos(0.5t)*25, z = sin(0.5t)*25
        OrbitLight {
            color: PALETTE[2],
            intensity: POINT_LIGHT_INTENSITY,
            range: POINT_LIGHT_RANGE,
            height: -20.0,
            radius_x: 25.0,
            radius_z: 25.0,
            angular_speed: 0.5,
            phase_x: FRAC_PI_2,
            phase_z: -FRAC_PI_2,
        },
    ]
}

/// Everything generated once at initialization and released on teardown.
pub struct Scene {
    pub particles: ParticleBatch,
    pub shapes: Vec<FloatingShape>,
    pub lights: [OrbitLight; 2],
}

impl Scene {
    pub fn generate(params: SceneParams, rng: &mut impl Rng) -> Self {
        let particles = ParticleBatch::generate(params.particle_count, rng);
        let shapes = (0..params.shape_count)
            .map(|_| FloatingShape::generate(rng))
            .collect();
        Self {
            particles,
            shapes,
            lights: orbit_lights(),
        }
    }
}
