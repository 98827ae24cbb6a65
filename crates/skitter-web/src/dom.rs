use glam::Vec2;
use skitter_core::Rect;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Viewport dimensions in CSS px; zeros when the window is unavailable.
#[inline]
pub fn viewport_size() -> Vec2 {
    web::window()
        .map(|w| {
            let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            Vec2::new(width as f32, height as f32)
        })
        .unwrap_or(Vec2::ZERO)
}

#[inline]
pub fn bounding_rect(element: &web::Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect {
        left: r.left() as f32,
        top: r.top() as f32,
        width: r.width() as f32,
        height: r.height() as f32,
    }
}

#[inline]
pub fn add_mouse_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::MouseEvent) + 'static,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(
        Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(_)>,
    );
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}
