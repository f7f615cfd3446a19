#![cfg(target_arch = "wasm32")]
use crate::constants::{
    CANVAS_CONTAINER_ID, DIM_X_ID, DIM_Y_ID, DIM_Z_ID, RENDER_BUTTON_ID,
};
use crate::core::{RoomDimensions, Session};
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod render;

type SharedContext = Rc<RefCell<FrameContext<'static>>>;

fn wire_window_resize(frame_ctx: &SharedContext) {
    let frame_ctx = frame_ctx.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let mut ctx = frame_ctx.borrow_mut();
        let Some(canvas) = ctx.canvas.clone() else {
            return;
        };
        dom::sync_canvas_backing_size(&canvas);
        ctx.session.resize(input::css_viewport(&canvas));
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn read_dimensions(document: &web::Document) -> Option<RoomDimensions> {
    let field = |id: &str| dom::input_value(document, id).unwrap_or_default();
    match RoomDimensions::parse(&field(DIM_X_ID), &field(DIM_Y_ID), &field(DIM_Z_ID)) {
        Ok(dims) => Some(dims),
        Err(e) => {
            log::warn!("[build] rejected room size: {}", e);
            None
        }
    }
}

// The canvas is created on the first build and reused afterwards.
fn ensure_canvas(
    frame_ctx: &SharedContext,
    document: &web::Document,
) -> anyhow::Result<web::HtmlCanvasElement> {
    if let Some(canvas) = frame_ctx.borrow().canvas.clone() {
        return Ok(canvas);
    }
    let canvas = dom::create_canvas_in(document, CANVAS_CONTAINER_ID)?;
    dom::sync_canvas_backing_size(&canvas);
    frame_ctx.borrow_mut().canvas = Some(canvas.clone());
    Ok(canvas)
}

fn on_render_pressed(frame_ctx: &SharedContext) -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let Some(dims) = read_dimensions(&document) else {
        return Ok(());
    };
    let canvas = ensure_canvas(frame_ctx, &document)?;

    let wire_handlers = {
        let mut ctx = frame_ctx.borrow_mut();
        ctx.session.resize(input::css_viewport(&canvas));
        ctx.session.build(dims);
        ctx.tones.resume_if_created();
        !std::mem::replace(&mut ctx.handlers_wired, true)
    };
    if wire_handlers {
        events::wire_input_handlers(events::InputWiring {
            canvas: canvas.clone(),
            frame_ctx: frame_ctx.clone(),
        });
    }
    frame::request_gpu(frame_ctx, canvas);
    frame::start_loop(frame_ctx.clone());
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("aural-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    if document.get_element_by_id(RENDER_BUTTON_ID).is_none() {
        anyhow::bail!("missing #{}", RENDER_BUTTON_ID);
    }

    let frame_ctx: SharedContext = Rc::new(RefCell::new(FrameContext::new(Session::new(
        Default::default(),
    ))));
    wire_window_resize(&frame_ctx);

    let frame_ctx_btn = frame_ctx.clone();
    dom::add_click_listener(&document, RENDER_BUTTON_ID, move || {
        if let Err(e) = on_render_pressed(&frame_ctx_btn) {
            log::error!("[build] {:?}", e);
        }
    });
    log::info!("ready; press Render to build the room");
    Ok(())
}
