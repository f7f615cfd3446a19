use crate::constants::CLICK_DRAG_TOLERANCE_PX;
use crate::frame::FrameContext;
use crate::input;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub frame_ctx: Rc<RefCell<FrameContext<'static>>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_click(&w);
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
    wire_contextmenu(&w);
}

fn wire_click(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let mut guard = w.frame_ctx.borrow_mut();
        let ctx = &mut *guard;
        if ctx.session.was_dragged(CLICK_DRAG_TOLERANCE_PX) {
            return;
        }
        let Some(ndc) = input::event_ndc(&ev, &w.canvas) else {
            return;
        };
        if ctx
            .session
            .handle_click(ndc, Instant::now(), &mut ctx.tones)
            .is_none()
        {
            log::debug!("[click] no surface under ({:.3},{:.3})", ndc.x, ndc.y);
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mode = input::drag_mode_for(&ev);
        w.frame_ctx
            .borrow_mut()
            .session
            .pointer_down(mode, input::pointer_client_px(&ev));
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        w.frame_ctx
            .borrow_mut()
            .session
            .pointer_move(input::pointer_client_px(&ev));
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        w.frame_ctx.borrow_mut().session.pointer_up();
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        ev.prevent_default();
        w.frame_ctx.borrow_mut().session.wheel(ev.delta_y() as f32);
    }) as Box<dyn FnMut(_)>);
    // not passive, so the page does not scroll under the canvas
    let options = web::AddEventListenerOptions::new();
    options.set_passive(false);
    _ = canvas_for_listener.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        closure.as_ref().unchecked_ref(),
        &options,
    );
    closure.forget();
}

fn wire_contextmenu(w: &InputWiring) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("contextmenu", closure.as_ref().unchecked_ref());
    closure.forget();
}
