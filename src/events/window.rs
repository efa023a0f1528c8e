use crate::dom;
use crate::frame::SharedStage;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep the canvas backing store and the GPU surface in step with the window.
pub fn wire_resize(canvas: &web::HtmlCanvasElement, stage: SharedStage) {
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
        stage
            .borrow_mut()
            .resize(canvas_resize.width(), canvas_resize.height());
        log::debug!(
            "[stage] resize {}x{}",
            canvas_resize.width(),
            canvas_resize.height()
        );
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
