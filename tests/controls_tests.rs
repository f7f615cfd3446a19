// Host-side tests for orbit camera controls.

use aural_core::{Camera, DragMode, OrbitControls, Viewport};
use glam::{Vec2, Vec3};

fn setup() -> (Camera, OrbitControls) {
    let camera = Camera::looking_at(Vec3::new(5.0, 3.0, 7.5), Vec3::ZERO, 1.0);
    (camera, OrbitControls::new(Vec3::ZERO))
}

fn viewport() -> Viewport {
    Viewport::new(800.0, 600.0)
}

#[test]
fn no_input_leaves_the_camera_alone() {
    let (mut camera, mut controls) = setup();
    let eye = camera.eye;
    assert!(!controls.update(&mut camera));
    assert_eq!(camera.eye, eye);
}

#[test]
fn rotation_keeps_distance_to_target() {
    let (mut camera, mut controls) = setup();
    let before = camera.eye.length();
    controls.begin_drag(DragMode::Rotate, Vec2::ZERO);
    for step in 1..=10 {
        controls.drag_to(Vec2::new(step as f32 * 17.0, step as f32 * 5.0), &camera, viewport());
        assert!(controls.update(&mut camera));
        assert!((camera.eye.length() - before).abs() < 1e-3);
    }
    controls.end_drag();
    assert_eq!(camera.target, Vec3::ZERO);
}

#[test]
fn full_height_drag_turns_a_full_circle() {
    let (mut camera, mut controls) = setup();
    let eye = camera.eye;
    controls.begin_drag(DragMode::Rotate, Vec2::ZERO);
    controls.drag_to(Vec2::new(600.0, 0.0), &camera, viewport());
    controls.update(&mut camera);
    assert!((camera.eye - eye).length() < 1e-3, "{:?}", camera.eye);
}

#[test]
fn polar_angle_is_clamped() {
    let (mut camera, mut controls) = setup();
    controls.begin_drag(DragMode::Rotate, Vec2::ZERO);
    controls.drag_to(Vec2::new(0.0, 100_000.0), &camera, viewport());
    controls.update(&mut camera);
    let dir = (camera.eye - camera.target).normalize();
    assert!(dir.is_finite());
    assert!(dir.y > 0.99, "{dir:?}");
    // never exactly above the target
    assert!(Vec2::new(dir.x, dir.z).length() > 0.0);

    controls.drag_to(Vec2::new(0.0, -100_000.0), &camera, viewport());
    controls.update(&mut camera);
    let dir = (camera.eye - camera.target).normalize();
    assert!(dir.y < -0.99, "{dir:?}");
    assert!(Vec2::new(dir.x, dir.z).length() > 0.0);
}

#[test]
fn pan_moves_target_and_eye_together() {
    let (mut camera, mut controls) = setup();
    let offset = camera.eye - camera.target;
    controls.begin_drag(DragMode::Pan, Vec2::ZERO);
    controls.drag_to(Vec2::new(50.0, -30.0), &camera, viewport());
    assert!(controls.update(&mut camera));
    assert_ne!(camera.target, Vec3::ZERO);
    assert_eq!(controls.target, camera.target);
    assert!((camera.eye - camera.target - offset).length() < 1e-3);
}

#[test]
fn wheel_zooms_by_fixed_steps_within_limits() {
    let (mut camera, mut controls) = setup();
    let d0 = camera.eye.length();
    controls.zoom(-120.0);
    controls.update(&mut camera);
    assert!((camera.eye.length() - d0 * 0.95).abs() < 1e-3);
    controls.zoom(120.0);
    controls.update(&mut camera);
    assert!((camera.eye.length() - d0).abs() < 1e-3);

    for _ in 0..500 {
        controls.zoom(-1.0);
    }
    controls.update(&mut camera);
    assert!(camera.eye.length() >= controls.min_distance - 1e-4);
}

#[test]
fn drag_travel_accumulates_until_next_press() {
    let (camera, mut controls) = setup();
    controls.begin_drag(DragMode::Rotate, Vec2::ZERO);
    controls.drag_to(Vec2::new(3.0, 4.0), &camera, viewport());
    controls.drag_to(Vec2::new(3.0, 0.0), &camera, viewport());
    controls.end_drag();
    assert_eq!(controls.drag_mode(), DragMode::None);
    assert!((controls.drag_travel() - 9.0).abs() < 1e-5);
    // moves without a press do not count
    controls.drag_to(Vec2::new(100.0, 100.0), &camera, viewport());
    assert!((controls.drag_travel() - 9.0).abs() < 1e-5);
    controls.begin_drag(DragMode::Pan, Vec2::ZERO);
    assert_eq!(controls.drag_travel(), 0.0);
}

#[test]
fn ray_through_center_points_at_target() {
    let (camera, _) = setup();
    let ray = camera.ray_from_ndc(Vec2::ZERO);
    let expected = (camera.target - camera.eye).normalize();
    assert!((ray.direction - expected).length() < 1e-4);
    assert_eq!(ray.origin, camera.eye);
}
