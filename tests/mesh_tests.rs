// Host-side tests for generated geometry.

use aural_core::constants::GRID_MAX_DIVISIONS;
use aural_core::mesh::{grid_lines, unit_box, uv_sphere, wireframe};
use glam::Vec3;
use std::collections::HashSet;

fn pos(v: [f32; 3]) -> Vec3 {
    Vec3::from(v)
}

#[test]
fn unit_box_faces_point_outward() {
    let mesh = unit_box();
    assert_eq!(mesh.vertices.len(), 24);
    assert_eq!(mesh.triangle_count(), 12);
    for v in &mesh.vertices {
        assert!(pos(v.position).abs().max_element() <= 0.5 + 1e-6);
    }
    for tri in mesh.indices.chunks_exact(3) {
        let [a, b, c] = [0, 1, 2].map(|i| &mesh.vertices[tri[i] as usize]);
        let n = (pos(b.position) - pos(a.position)).cross(pos(c.position) - pos(a.position));
        assert!(n.dot(pos(a.normal)) > 0.0, "inward triangle {tri:?}");
    }
}

#[test]
fn sphere_is_unit_radius_with_radial_normals() {
    let mesh = uv_sphere(16, 16);
    assert_eq!(mesh.vertices.len(), 17 * 17);
    // two fewer triangles per column at the poles
    assert_eq!(mesh.triangle_count(), 16 * 16 * 2 - 2 * 16);
    for v in &mesh.vertices {
        assert!((pos(v.position).length() - 1.0).abs() < 1e-5);
        assert!((pos(v.normal) - pos(v.position)).length() < 1e-4);
    }
    assert!(mesh.indices.iter().all(|i| (*i as usize) < mesh.vertices.len()));
}

#[test]
fn wireframe_has_unique_non_degenerate_edges() {
    let sphere = uv_sphere(16, 16);
    let wire = wireframe(&sphere);
    assert!(wire.line_count() > 0);
    let mut seen = HashSet::new();
    for edge in wire.indices.chunks_exact(2) {
        assert!(seen.insert((edge[0], edge[1])), "duplicate edge {edge:?}");
        let a = wire.vertices[edge[0] as usize].position;
        let b = wire.vertices[edge[1] as usize].position;
        assert_ne!(a, b);
    }
}

#[test]
fn grid_covers_the_floor_footprint() {
    let mesh = grid_lines(6.0, 4.0, (6, 4));
    assert_eq!(mesh.line_count(), 7 + 5);
    for v in &mesh.vertices {
        let p = pos(v.position);
        assert_eq!(p.y, 0.0);
        assert!(p.x.abs() <= 3.0 + 1e-5 && p.z.abs() <= 2.0 + 1e-5);
    }
    let xs: Vec<f32> = mesh.vertices.iter().map(|v| v.position[0]).collect();
    assert!(xs.iter().any(|x| (*x + 3.0).abs() < 1e-5));
    assert!(xs.iter().any(|x| (*x - 3.0).abs() < 1e-5));
}

#[test]
fn grid_with_zero_divisions_still_draws_the_border() {
    let mesh = grid_lines(1.0, 1.0, (0, 0));
    assert_eq!(mesh.line_count(), 4);
}

#[test]
fn grid_line_count_is_bounded() {
    let mesh = grid_lines(1.0e6, 4.0, (u32::MAX, 4));
    assert_eq!(mesh.line_count(), (GRID_MAX_DIVISIONS as usize + 1) + 5);
}
