// Shape mesh invariants: unit normals, in-range indices, expected counts.

use hero_core::mesh::{cone, cuboid, sphere, MeshData};

fn assert_well_formed(mesh: &MeshData) {
    assert!(!mesh.vertices.is_empty());
    assert!(!mesh.indices.is_empty());
    assert_eq!(mesh.indices.len() % 3, 0, "index count must form triangles");
    for &i in &mesh.indices {
        assert!((i as usize) < mesh.vertices.len(), "index out of range");
    }
    for v in &mesh.vertices {
        let n = v.normal;
        let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
        assert!((len - 1.0).abs() < 1e-4, "normal not unit length");
    }
}

#[test]
fn sphere_mesh_counts() {
    let mesh = sphere(1.0, 16, 16);
    assert_well_formed(&mesh);
    assert_eq!(mesh.vertices.len(), 17 * 17);
    // 16x16 quads, two triangles each, minus one collapsed triangle per
    // pole-adjacent quad
    assert_eq!(mesh.indices.len(), (16 * 16 * 2 - 32) * 3);
}

#[test]
fn sphere_vertices_lie_on_the_radius() {
    let radius = 2.5;
    let mesh = sphere(radius, 16, 16);
    for v in &mesh.vertices {
        let p = v.position;
        let len = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
        assert!((len - radius).abs() < 1e-4);
    }
}

#[test]
fn cuboid_mesh_counts_and_extents() {
    let mesh = cuboid(2.0, 4.0, 6.0);
    assert_well_formed(&mesh);
    assert_eq!(mesh.vertices.len(), 24);
    assert_eq!(mesh.indices.len(), 36);
    for v in &mesh.vertices {
        assert!(v.position[0].abs() <= 1.0 + 1e-6);
        assert!(v.position[1].abs() <= 2.0 + 1e-6);
        assert!(v.position[2].abs() <= 3.0 + 1e-6);
    }
}

#[test]
fn cone_mesh_counts() {
    let mesh = cone(1.0, 2.0, 8);
    assert_well_formed(&mesh);
    // side: (8+1) rim/apex pairs; cap: center + (8+1) rim
    assert_eq!(mesh.vertices.len(), 18 + 10);
    // 8 side triangles + 8 cap triangles
    assert_eq!(mesh.indices.len(), 48);
}

#[test]
fn cone_is_centered_vertically() {
    let mesh = cone(1.5, 4.0, 8);
    let min_y = mesh
        .vertices
        .iter()
        .map(|v| v.position[1])
        .fold(f32::INFINITY, f32::min);
    let max_y = mesh
        .vertices
        .iter()
        .map(|v| v.position[1])
        .fold(f32::NEG_INFINITY, f32::max);
    assert!((min_y + 2.0).abs() < 1e-5);
    assert!((max_y - 2.0).abs() < 1e-5);
}
