// Host-side tests for pointer mapping and ray picking.

use aural_core::{
    build_camera, build_scene, intersect_scene, marker_node, pointer_ndc, ray_aabb, ray_sphere,
    resolve_point, ClientRect, NodeKind, RoomDimensions,
};
use glam::{Vec2, Vec3};

fn rect() -> ClientRect {
    ClientRect {
        left: 10.0,
        top: 20.0,
        width: 200.0,
        height: 100.0,
    }
}

#[test]
fn ndc_maps_corners_and_center() {
    assert_eq!(pointer_ndc(10.0, 20.0, rect()), Some(Vec2::new(-1.0, 1.0)));
    assert_eq!(pointer_ndc(210.0, 120.0, rect()), Some(Vec2::new(1.0, -1.0)));
    assert_eq!(pointer_ndc(110.0, 70.0, rect()), Some(Vec2::ZERO));
}

#[test]
fn ndc_of_empty_rect_is_none() {
    let empty = ClientRect {
        width: 0.0,
        ..rect()
    };
    assert_eq!(pointer_ndc(10.0, 20.0, empty), None);
}

#[test]
fn ray_sphere_intersection_basic() {
    let t = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 5.0), 2.0).unwrap();
    assert!((t - 3.0).abs() < 1e-5);
}

#[test]
fn ray_sphere_intersection_miss() {
    assert!(ray_sphere(Vec3::ZERO, Vec3::X, Vec3::new(0.0, 0.0, 5.0), 2.0).is_none());
    // sphere behind the origin
    assert!(ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, -5.0), 2.0).is_none());
}

#[test]
fn ray_aabb_reports_entry_and_exit() {
    let (t0, t1) = ray_aabb(
        Vec3::new(0.0, 0.0, 10.0),
        Vec3::NEG_Z,
        Vec3::splat(-1.0),
        Vec3::splat(1.0),
    )
    .unwrap();
    assert!((t0 - 9.0).abs() < 1e-5);
    assert!((t1 - 11.0).abs() < 1e-5);
}

#[test]
fn ray_aabb_from_inside_enters_behind() {
    let (t0, t1) = ray_aabb(Vec3::ZERO, Vec3::X, Vec3::splat(-1.0), Vec3::splat(1.0)).unwrap();
    assert!(t0 < 0.0);
    assert!((t1 - 1.0).abs() < 1e-5);
}

#[test]
fn ray_aabb_misses() {
    assert!(ray_aabb(Vec3::new(0.0, 5.0, 10.0), Vec3::NEG_Z, Vec3::splat(-1.0), Vec3::splat(1.0))
        .is_none());
    assert!(ray_aabb(Vec3::new(0.0, 0.0, 10.0), Vec3::Z, Vec3::splat(-1.0), Vec3::splat(1.0))
        .is_none());
}

#[test]
fn center_click_hits_the_far_wall_from_inside() {
    let dims = RoomDimensions::default();
    let scene = build_scene(&dims);
    let camera = build_camera(&dims, 1.0);
    let p = resolve_point(Vec2::ZERO, &camera, &scene).expect("room hit");
    // the back side is hit where the ray leaves the box: the z = -2.5 wall
    assert!((p.z + 2.5).abs() < 1e-3, "{p:?}");
    assert!(p.x.abs() <= 2.5 + 1e-3 && p.y.abs() <= 1.5 + 1e-3);
}

#[test]
fn corner_click_misses_everything() {
    let dims = RoomDimensions::default();
    let scene = build_scene(&dims);
    let camera = build_camera(&dims, 1.0);
    assert_eq!(resolve_point(Vec2::new(0.99, 0.99), &camera, &scene), None);
}

#[test]
fn markers_are_hit_before_the_wall_behind_them() {
    let dims = RoomDimensions::default();
    let mut scene = build_scene(&dims);
    let camera = build_camera(&dims, 1.0);
    let wall = resolve_point(Vec2::ZERO, &camera, &scene).unwrap();
    let marker = scene.add(marker_node(wall));

    let hits = intersect_scene(&camera.ray_from_ndc(Vec2::ZERO), &scene);
    assert!(hits.len() >= 2);
    assert_eq!(hits[0].node, marker);
    assert!(hits.windows(2).all(|w| w[0].distance <= w[1].distance));
}

#[test]
fn grid_and_lights_are_not_pick_targets() {
    let dims = RoomDimensions::default();
    let scene = build_scene(&dims);
    // straight down the floor from above, through the grid
    let ray = aural_core::Ray {
        origin: Vec3::new(0.3, 10.0, 0.3),
        direction: Vec3::NEG_Y,
    };
    let hits = intersect_scene(&ray, &scene);
    assert_eq!(hits.len(), 1);
    let node = scene.get(hits[0].node).unwrap();
    assert!(matches!(node.kind, NodeKind::RoomBox { .. }));
    assert!((hits[0].point.y - dims.floor_y()).abs() < 1e-4);
}

#[test]
fn ray_grazing_the_grid_passes_to_the_far_wall() {
    let dims = RoomDimensions::default();
    let scene = build_scene(&dims);
    // just above the floor, running along a grid line
    let ray = aural_core::Ray {
        origin: Vec3::new(-10.0, dims.floor_y() + 0.05, 0.0),
        direction: Vec3::X,
    };
    let hits = intersect_scene(&ray, &scene);
    assert_eq!(hits.len(), 1);
    let node = scene.get(hits[0].node).unwrap();
    assert!(matches!(node.kind, NodeKind::RoomBox { .. }));
    assert!((hits[0].point.x - dims.size().x / 2.0).abs() < 1e-4);
}
