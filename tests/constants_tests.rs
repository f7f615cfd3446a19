// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use aural_core::constants::*;
use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn web_constants_are_within_reasonable_bounds() {
    assert!(CLICK_DRAG_TOLERANCE_PX > 0.0);
    // a click that moves a few pixels is still a click
    assert!(CLICK_DRAG_TOLERANCE_PX < 20.0);
    assert!(matches!(MSAA_SAMPLES, 1 | 4));
    assert!(INSTANCE_BATCH_CAPACITY > 0);
    assert!(CLEAR_COLOR.iter().all(|c| (0.0..=1.0).contains(c)));
    assert_ne!(BUTTON_PRIMARY, BUTTON_SECONDARY);
}

#[test]
fn dom_ids_are_distinct() {
    let ids = [
        CANVAS_CONTAINER_ID,
        RENDER_BUTTON_ID,
        DIM_X_ID,
        DIM_Y_ID,
        DIM_Z_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scene_constants_are_consistent() {
    assert!(DEFAULT_ROOM.iter().all(|v| *v > 0.0));
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);
    assert!(CAMERA_FOVY_DEG > 0.0 && CAMERA_FOVY_DEG < 180.0);
    assert!(FOG_NEAR < FOG_FAR);
    assert!(ORBIT_MIN_DISTANCE < ORBIT_MAX_DISTANCE);
    assert!(ORBIT_ZOOM_STEP > 0.0 && ORBIT_ZOOM_STEP < 1.0);
    assert!(ROOM_OPACITY > 0.0 && ROOM_OPACITY < 1.0);
    assert!(MARKER_RADIUS > 0.0);
    assert!(GRID_MAX_DIVISIONS as f32 >= DEFAULT_ROOM[0].max(DEFAULT_ROOM[2]));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn wave_and_tone_share_one_duration() {
    assert_eq!(WAVE_DURATION.as_secs_f64(), TONE_DURATION_SEC);
    assert_eq!(TONE_FREQUENCY_HZ, 440.0);
    assert!(TONE_START_GAIN > TONE_END_GAIN);
    assert!(WAVE_START_OPACITY > 0.0 && WAVE_START_OPACITY <= 1.0);
}

#[test]
fn fog_ramps_smoothly_between_near_and_far() {
    let wgsl = include_str!("../shaders/scene.wgsl");
    assert!(wgsl.contains("smoothstep(g.fog_range.x, g.fog_range.y, d)"));
    assert!(wgsl.contains("distance(world, g.eye.xyz)"));
}
