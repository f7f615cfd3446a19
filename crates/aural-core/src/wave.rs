//! Expanding "sound wave" sphere animation.
//!
//! Each effect is a two-state machine, `Running { started }` then `Done`,
//! advanced by the frame driver. Scale and opacity are pure functions of the
//! normalized time `u = elapsed / WAVE_DURATION`:
//!
//! - scale grows linearly from 1 to 6,
//! - opacity fades linearly from 0.5 and is clamped at 0.
//!
//! When `u >= 1` the final sample is applied, the sphere is removed from the
//! scene and the effect never touches the scene again.

use crate::constants::{WAVE_DURATION, WAVE_SCALE_GROWTH, WAVE_START_OPACITY};
use crate::scene::{NodeId, Scene};
use glam::Vec3;
use instant::Instant;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveSample {
    pub scale: f32,
    pub opacity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaveState {
    Running { started: Instant },
    Done,
}

/// Result of advancing one effect by one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WaveStep {
    Animating(WaveSample),
    Finished(WaveSample),
    Idle,
}

#[inline]
pub fn wave_progress(elapsed: Duration) -> f32 {
    (elapsed.as_secs_f64() / WAVE_DURATION.as_secs_f64()) as f32
}

#[inline]
pub fn wave_sample(u: f32) -> WaveSample {
    let u = u.max(0.0);
    WaveSample {
        scale: 1.0 + WAVE_SCALE_GROWTH * u.min(1.0),
        opacity: (WAVE_START_OPACITY - u).max(0.0),
    }
}

#[derive(Clone, Debug)]
pub struct WaveEffect {
    node: NodeId,
    state: WaveState,
}

impl WaveEffect {
    pub fn new(node: NodeId, started: Instant) -> Self {
        Self {
            node,
            state: WaveState::Running { started },
        }
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn state(&self) -> WaveState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == WaveState::Done
    }

    pub fn advance(&mut self, now: Instant) -> WaveStep {
        let WaveState::Running { started } = self.state else {
            return WaveStep::Idle;
        };
        let elapsed = if now > started { now - started } else { Duration::ZERO };
        let u = wave_progress(elapsed);
        let sample = wave_sample(u);
        if u < 1.0 {
            WaveStep::Animating(sample)
        } else {
            self.state = WaveState::Done;
            WaveStep::Finished(sample)
        }
    }
}

/// Counts reported by one `WaveAnimator::tick`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WaveTick {
    pub animating: usize,
    pub removed: usize,
}

/// All in-flight wave effects of one scene.
#[derive(Clone, Debug, Default)]
pub struct WaveAnimator {
    effects: Vec<WaveEffect>,
}

impl WaveAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, effect: WaveEffect) {
        self.effects.push(effect);
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn effects(&self) -> &[WaveEffect] {
        &self.effects
    }

    /// Advance every effect to `now`, writing samples into the scene and
    /// removing finished spheres.
    pub fn tick(&mut self, now: Instant, scene: &mut Scene) -> WaveTick {
        let mut report = WaveTick::default();
        for effect in &mut self.effects {
            match effect.advance(now) {
                WaveStep::Animating(sample) => {
                    apply_sample(scene, effect.node, sample);
                    report.animating += 1;
                }
                WaveStep::Finished(sample) => {
                    apply_sample(scene, effect.node, sample);
                    if scene.remove(effect.node) {
                        report.removed += 1;
                    }
                }
                WaveStep::Idle => {}
            }
        }
        self.effects.retain(|e| !e.is_done());
        report
    }
}

fn apply_sample(scene: &mut Scene, node: NodeId, sample: WaveSample) {
    if let Some(n) = scene.get_mut(node) {
        n.scale = Vec3::splat(sample.scale);
        if let Some(m) = n.material.as_mut() {
            m.opacity = sample.opacity;
        }
    }
}
