use crate::audio::SpatialTonePlayer;
use crate::core::Session;
use crate::render::{self, GpuState};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the event handlers and the frame callback share.
pub struct FrameContext<'a> {
    pub session: Session,
    pub tones: SpatialTonePlayer,
    pub canvas: Option<web::HtmlCanvasElement>,
    pub gpu: Option<GpuState<'a>>,
    pub gpu_pending: bool,
    pub loop_started: bool,
    pub handlers_wired: bool,
}

impl<'a> FrameContext<'a> {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            tones: SpatialTonePlayer::new(),
            canvas: None,
            gpu: None,
            gpu_pending: false,
            loop_started: false,
            handlers_wired: false,
        }
    }

    pub fn frame(&mut self) {
        let tick = self.session.frame(Instant::now());
        if tick.removed > 0 {
            log::debug!("[wave] {} finished, {} running", tick.removed, tick.animating);
        }
        self.draw();
    }

    fn draw(&mut self) {
        let (Some(gpu), Some(stage)) = (self.gpu.as_mut(), self.session.stage()) else {
            return;
        };
        if let Some(canvas) = &self.canvas {
            gpu.resize_if_needed(canvas.width(), canvas.height());
        }
        match gpu.render(stage) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => log::error!("[gpu] out of memory"),
            Err(e) => log::warn!("[gpu] frame skipped: {:?}", e),
        }
    }
}

/// Create the GPU state for the canvas in the background; frames before it
/// is ready update state without drawing.
pub fn request_gpu(frame_ctx: &Rc<RefCell<FrameContext<'static>>>, canvas: web::HtmlCanvasElement) {
    {
        let mut ctx = frame_ctx.borrow_mut();
        if ctx.gpu.is_some() || ctx.gpu_pending {
            return;
        }
        ctx.gpu_pending = true;
    }
    let frame_ctx = frame_ctx.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let gpu = render::init_gpu(&canvas).await;
        let mut ctx = frame_ctx.borrow_mut();
        ctx.gpu_pending = false;
        ctx.gpu = gpu;
    });
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    {
        let mut ctx = frame_ctx.borrow_mut();
        if ctx.loop_started {
            return;
        }
        ctx.loop_started = true;
    }
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
    log::info!("[frame] loop started");
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
