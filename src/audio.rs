use aural_core::{LazyHandle, ToneSink, ToneSpec};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Plays click tones through a lazily created, shared `AudioContext`.
///
/// The context is only created on the first tone so that browsers which
/// require a user gesture see it created from the click handler.
#[derive(Default)]
pub struct SpatialTonePlayer {
    ctx: LazyHandle<web::AudioContext>,
}

impl SpatialTonePlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume a suspended context; does nothing before the first tone.
    pub fn resume_if_created(&self) {
        if let Some(ctx) = self.ctx.get() {
            if ctx.state() == web::AudioContextState::Suspended {
                _ = ctx.resume();
            }
        }
    }
}

impl ToneSink for SpatialTonePlayer {
    fn play(&mut self, tone: &ToneSpec) {
        let ctx = match self.ctx.get_or_try_init(create_audio_context) {
            Ok(ctx) => ctx,
            Err(e) => {
                log::error!("[audio] no audio context: {:?}", e);
                return;
            }
        };
        if let Err(e) = voice_tone(ctx, tone) {
            log::error!("[audio] tone failed: {:?}", e);
        }
    }
}

fn create_audio_context() -> anyhow::Result<web::AudioContext> {
    match web::AudioContext::new() {
        Ok(ctx) => {
            log::info!("[audio] context created");
            Ok(ctx)
        }
        Err(e) => {
            log::warn!("[audio] AudioContext unavailable ({:?}), trying webkitAudioContext", e);
            webkit_audio_context()
        }
    }
}

// Older Safari only exposes the prefixed constructor.
fn webkit_audio_context() -> anyhow::Result<web::AudioContext> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let ctor = js_sys::Reflect::get(&window, &JsValue::from_str("webkitAudioContext"))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let ctor: js_sys::Function = ctor
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("webkitAudioContext is not available"))?;
    let ctx = js_sys::Reflect::construct(&ctor, &js_sys::Array::new())
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(ctx.unchecked_into())
}

fn create_gain(audio_ctx: &web::AudioContext, value: f32) -> anyhow::Result<web::GainNode> {
    let g = web::GainNode::new(audio_ctx).map_err(|e| anyhow::anyhow!("GainNode: {:?}", e))?;
    g.gain().set_value(value);
    Ok(g)
}

fn create_panner(audio_ctx: &web::AudioContext, tone: &ToneSpec) -> anyhow::Result<web::PannerNode> {
    let panner =
        web::PannerNode::new(audio_ctx).map_err(|e| anyhow::anyhow!("PannerNode: {:?}", e))?;
    panner.set_panning_model(web::PanningModelType::Hrtf);
    panner.position_x().set_value(tone.position.x);
    panner.position_y().set_value(tone.position.y);
    panner.position_z().set_value(tone.position.z);
    Ok(panner)
}

// oscillator -> panner -> gain -> destination, started now and stopped
// when the gain ramp reaches its end
fn voice_tone(audio_ctx: &web::AudioContext, tone: &ToneSpec) -> anyhow::Result<()> {
    let js = |e: JsValue| anyhow::anyhow!("{:?}", e);

    let src = web::OscillatorNode::new(audio_ctx).map_err(js)?;
    src.set_type(web::OscillatorType::Sine);
    src.frequency().set_value(tone.frequency_hz);
    let panner = create_panner(audio_ctx, tone)?;
    let gain = create_gain(audio_ctx, tone.start_gain)?;

    let at = tone.schedule(audio_ctx.current_time());
    gain.gain()
        .set_value_at_time(tone.start_gain, at.start)
        .map_err(js)?;
    gain.gain()
        .linear_ramp_to_value_at_time(tone.end_gain, at.ramp_end)
        .map_err(js)?;

    src.connect_with_audio_node(&panner).map_err(js)?;
    panner.connect_with_audio_node(&gain).map_err(js)?;
    gain.connect_with_audio_node(&audio_ctx.destination())
        .map_err(js)?;
    src.start_with_when(at.start).map_err(js)?;
    src.stop_with_when(at.stop).map_err(js)?;
    Ok(())
}
