//! Platform-independent description of the click tone and the sink that
//! turns it into sound.

use crate::constants::{TONE_DURATION_SEC, TONE_END_GAIN, TONE_FREQUENCY_HZ, TONE_START_GAIN};
use crate::scene::WorldPoint;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneSpec {
    pub position: WorldPoint,
    pub frequency_hz: f32,
    pub duration_sec: f64,
    pub start_gain: f32,
    pub end_gain: f32,
}

/// Audio-clock times (seconds) at which a tone's nodes are driven.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneSchedule {
    pub start: f64,
    pub ramp_end: f64,
    pub stop: f64,
}

impl ToneSpec {
    /// The fixed 440 Hz click tone, panned to `position`.
    pub fn at(position: WorldPoint) -> Self {
        Self {
            position,
            frequency_hz: TONE_FREQUENCY_HZ,
            duration_sec: TONE_DURATION_SEC,
            start_gain: TONE_START_GAIN,
            end_gain: TONE_END_GAIN,
        }
    }

    /// Start now, ramp the gain over the whole duration, stop at its end.
    pub fn schedule(&self, now_sec: f64) -> ToneSchedule {
        let end = now_sec + self.duration_sec;
        ToneSchedule {
            start: now_sec,
            ramp_end: end,
            stop: end,
        }
    }

    /// Envelope gain `t` seconds after the start.
    pub fn gain_at(&self, t: f64) -> f32 {
        if self.duration_sec <= 0.0 {
            return self.end_gain;
        }
        let k = (t / self.duration_sec).clamp(0.0, 1.0) as f32;
        self.start_gain + (self.end_gain - self.start_gain) * k
    }
}

/// Anything that can voice a tone. Implementations must not block and must
/// let concurrent tones overlap.
pub trait ToneSink {
    fn play(&mut self, tone: &ToneSpec);
}
