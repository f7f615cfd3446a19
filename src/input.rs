use crate::constants::{BUTTON_PRIMARY, BUTTON_SECONDARY};
use aural_core::{pointer_ndc, ClientRect, DragMode, Viewport};
use glam::Vec2;
use web_sys as web;

#[inline]
pub fn client_rect(canvas: &web::HtmlCanvasElement) -> ClientRect {
    let rect = canvas.get_bounding_client_rect();
    ClientRect {
        left: rect.left() as f32,
        top: rect.top() as f32,
        width: rect.width() as f32,
        height: rect.height() as f32,
    }
}

/// Canvas size in CSS pixels, which is what orbit input is measured in.
#[inline]
pub fn css_viewport(canvas: &web::HtmlCanvasElement) -> Viewport {
    let rect = client_rect(canvas);
    Viewport::new(rect.width.max(1.0), rect.height.max(1.0))
}

#[inline]
pub fn pointer_client_px(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Normalized device coordinates of a mouse/pointer event over the canvas.
#[inline]
pub fn event_ndc(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    let p = pointer_client_px(ev);
    pointer_ndc(p.x, p.y, client_rect(canvas))
}

// primary drag rotates, secondary (or shift + primary) pans
#[inline]
pub fn drag_mode_for(ev: &web::MouseEvent) -> DragMode {
    match ev.button() {
        BUTTON_PRIMARY if ev.shift_key() => DragMode::Pan,
        BUTTON_PRIMARY => DragMode::Rotate,
        BUTTON_SECONDARY => DragMode::Pan,
        _ => DragMode::None,
    }
}
