//! CPU-side triangle meshes for the floating solids.
//!
//! The renderer consumes these as raw vertex/index buffers; dimensions are
//! baked into the vertices so the per-frame model matrix is rotation plus
//! translation only (normals stay valid without an inverse transpose).

use std::f32::consts::PI;

/// Interleaved vertex layout shared by all shape meshes.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

/// UV sphere centered on the origin.
pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let mut mesh = MeshData::default();
    for y in 0..=height_segments {
        let v = y as f32 / height_segments as f32;
        let phi = v * PI;
        for x in 0..=width_segments {
            let u = x as f32 / width_segments as f32;
            let theta = u * 2.0 * PI;
            let n = [
                phi.sin() * theta.cos(),
                phi.cos(),
                phi.sin() * theta.sin(),
            ];
            mesh.vertices.push(MeshVertex {
                position: [n[0] * radius, n[1] * radius, n[2] * radius],
                normal: n,
            });
        }
    }
    let stride = width_segments + 1;
    for y in 0..height_segments {
        for x in 0..width_segments {
            let a = y * stride + x;
            let b = a + stride;
            // Skip the degenerate triangle that collapses onto each pole
            if y != 0 {
                mesh.indices.extend_from_slice(&[a, b, a + 1]);
            }
            if y != height_segments - 1 {
                mesh.indices.extend_from_slice(&[a + 1, b, b + 1]);
            }
        }
    }
    mesh
}

/// Axis-aligned box centered on the origin, four vertices per face so each
/// face carries its own normal.
pub fn cuboid(size_x: f32, size_y: f32, size_z: f32) -> MeshData {
    let (hx, hy, hz) = (size_x * 0.5, size_y * 0.5, size_z * 0.5);
    // (normal, four corners counter-clockwise when viewed from outside)
    let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
        (
            [1.0, 0.0, 0.0],
            [
                [hx, -hy, -hz],
                [hx, hy, -hz],
                [hx, hy, hz],
                [hx, -hy, hz],
            ],
        ),
        (
            [-1.0, 0.0, 0.0],
            [
                [-hx, -hy, hz],
                [-hx, hy, hz],
                [-hx, hy, -hz],
                [-hx, -hy, -hz],
            ],
        ),
        (
            [0.0, 1.0, 0.0],
            [
                [-hx, hy, -hz],
                [-hx, hy, hz],
                [hx, hy, hz],
                [hx, hy, -hz],
            ],
        ),
        (
            [0.0, -1.0, 0.0],
            [
                [-hx, -hy, hz],
                [-hx, -hy, -hz],
                [hx, -hy, -hz],
                [hx, -hy, hz],
            ],
        ),
        (
            [0.0, 0.0, 1.0],
            [
                [-hx, -hy, hz],
                [hx, -hy, hz],
                [hx, hy, hz],
                [-hx, hy, hz],
            ],
        ),
        (
            [0.0, 0.0, -1.0],
            [
                [hx, -hy, -hz],
                [-hx, -hy, -hz],
                [-hx, hy, -hz],
                [hx, hy, -hz],
            ],
        ),
    ];
    let mut mesh = MeshData::default();
    for (normal, corners) in faces {
        let base = mesh.vertices.len() as u32;
        for position in corners {
            mesh.vertices.push(MeshVertex { position, normal });
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}

/// Cone with its apex at +height/2 and a capped base at -height/2.
pub fn cone(radius: f32, height: f32, radial_segments: u32) -> MeshData {
    let mut mesh = MeshData::default();
    let half = height * 0.5;

    // Side: one apex vertex per segment so slant normals stay per-facet smooth
    for s in 0..=radial_segments {
        let theta = s as f32 / radial_segments as f32 * 2.0 * PI;
        let (sin_t, cos_t) = theta.sin_cos();
        let slant = [cos_t * height, radius, sin_t * height];
        let len = (slant[0] * slant[0] + slant[1] * slant[1] + slant[2] * slant[2]).sqrt();
        let normal = [slant[0] / len, slant[1] / len, slant[2] / len];
        mesh.vertices.push(MeshVertex {
            position: [cos_t * radius, -half, sin_t * radius],
            normal,
        });
        mesh.vertices.push(MeshVertex {
            position: [0.0, half, 0.0],
            normal,
        });
    }
    for s in 0..radial_segments {
        let a = s * 2;
        mesh.indices.extend_from_slice(&[a, a + 1, a + 2]);
    }

    // Base cap
    let base = mesh.vertices.len() as u32;
    mesh.vertices.push(MeshVertex {
        position: [0.0, -half, 0.0],
        normal: [0.0, -1.0, 0.0],
    });
    for s in 0..=radial_segments {
        let theta = s as f32 / radial_segments as f32 * 2.0 * PI;
        let (sin_t, cos_t) = theta.sin_cos();
        mesh.vertices.push(MeshVertex {
            position: [cos_t * radius, -half, sin_t * radius],
            normal: [0.0, -1.0, 0.0],
        });
    }
    for s in 0..radial_segments {
        mesh.indices
            .extend_from_slice(&[base, base + 1 + s, base + 2 + s]);
    }
    mesh
}
