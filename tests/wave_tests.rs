// Host-side tests for the wave effect timing rule.

use aural_core::constants::WAVE_DURATION;
use aural_core::{
    wave_node, wave_progress, wave_sample, NodeKind, Scene, WaveAnimator, WaveEffect, WaveState,
    WaveStep,
};
use glam::Vec3;
use instant::Instant;
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn sample_starts_at_one_and_half_opacity() {
    let s = wave_sample(0.0);
    assert_eq!(s.scale, 1.0);
    assert_eq!(s.opacity, 0.5);
}

#[test]
fn sample_ends_at_six_and_transparent() {
    let s = wave_sample(1.0);
    assert_eq!(s.scale, 6.0);
    assert_eq!(s.opacity, 0.0);
    // overshooting a frame does not grow the sphere further
    let late = wave_sample(1.7);
    assert_eq!(late.scale, 6.0);
    assert_eq!(late.opacity, 0.0);
}

#[test]
fn scale_rises_and_opacity_falls_monotonically() {
    let mut prev = wave_sample(0.0);
    for i in 1..=120 {
        let s = wave_sample(i as f32 / 100.0);
        assert!(s.scale >= prev.scale, "scale shrank at step {i}");
        assert!(s.opacity <= prev.opacity, "opacity rose at step {i}");
        assert!(s.opacity >= 0.0);
        assert!((1.0..=6.0).contains(&s.scale));
        prev = s;
    }
}

#[test]
fn opacity_reaches_zero_halfway() {
    assert!((wave_sample(0.25).opacity - 0.25).abs() < 1e-6);
    assert_eq!(wave_sample(0.5).opacity, 0.0);
    assert!((wave_sample(0.5).scale - 3.5).abs() < 1e-6);
}

#[test]
fn progress_is_elapsed_over_duration() {
    assert_eq!(wave_progress(Duration::ZERO), 0.0);
    assert!((wave_progress(ms(150)) - 0.5).abs() < 1e-6);
    assert_eq!(wave_progress(WAVE_DURATION), 1.0);
}

#[test]
fn effect_runs_until_duration_then_finishes_once() {
    let t0 = Instant::now();
    let mut scene = Scene::new();
    let node = scene.add(wave_node(Vec3::ZERO));
    let mut effect = WaveEffect::new(node, t0);

    assert!(matches!(effect.advance(t0 + ms(100)), WaveStep::Animating(_)));
    assert!(matches!(effect.advance(t0 + ms(299)), WaveStep::Animating(_)));
    assert!(matches!(effect.state(), WaveState::Running { .. }));
    match effect.advance(t0 + ms(300)) {
        WaveStep::Finished(s) => assert_eq!(s.scale, 6.0),
        other => panic!("expected Finished, got {other:?}"),
    }
    assert!(effect.is_done());
    assert_eq!(effect.advance(t0 + ms(400)), WaveStep::Idle);
}

#[test]
fn clock_before_start_counts_as_zero_elapsed() {
    let t0 = Instant::now() + ms(50);
    let mut effect = WaveEffect::new(aural_core::Scene::new().add(wave_node(Vec3::ZERO)), t0);
    match effect.advance(t0 - ms(20)) {
        WaveStep::Animating(s) => assert_eq!(s.scale, 1.0),
        other => panic!("expected Animating, got {other:?}"),
    }
}

#[test]
fn animator_updates_node_then_removes_it_exactly_once() {
    let t0 = Instant::now();
    let mut scene = Scene::new();
    let node = scene.add(wave_node(Vec3::new(1.0, 0.0, -1.0)));
    let mut waves = WaveAnimator::new();
    waves.push(WaveEffect::new(node, t0));

    let tick = waves.tick(t0 + ms(150), &mut scene);
    assert_eq!((tick.animating, tick.removed), (1, 0));
    let n = scene.get(node).expect("wave still in scene");
    assert!((n.scale.x - 3.5).abs() < 1e-4);
    assert!((n.material.unwrap().opacity - 0.0).abs() < 1e-6);
    assert_eq!(n.position, Vec3::new(1.0, 0.0, -1.0));

    let tick = waves.tick(t0 + ms(299), &mut scene);
    assert_eq!(tick.removed, 0);
    assert!(scene.contains(node));

    let tick = waves.tick(t0 + ms(300), &mut scene);
    assert_eq!(tick.removed, 1);
    assert!(!scene.contains(node));
    assert!(waves.is_empty());

    let tick = waves.tick(t0 + ms(400), &mut scene);
    assert_eq!((tick.animating, tick.removed), (0, 0));
}

#[test]
fn overlapping_effects_are_independent() {
    let t0 = Instant::now();
    let mut scene = Scene::new();
    let first = scene.add(wave_node(Vec3::X));
    let second = scene.add(wave_node(Vec3::NEG_X));
    let mut waves = WaveAnimator::new();
    waves.push(WaveEffect::new(first, t0));
    waves.push(WaveEffect::new(second, t0 + ms(200)));

    let tick = waves.tick(t0 + ms(320), &mut scene);
    assert_eq!(tick.removed, 1);
    assert!(!scene.contains(first));
    assert!(scene.contains(second));
    assert_eq!(waves.len(), 1);
    assert_eq!(waves.effects()[0].node(), second);

    waves.tick(t0 + ms(520), &mut scene);
    assert!(!scene.contains(second));
    assert_eq!(scene.count(|k| matches!(k, NodeKind::Wave { .. })), 0);
}
