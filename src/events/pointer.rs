use crate::dom;
use crate::frame::SharedStage;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feed window pointer moves into the stage's pointer state.
///
/// Coordinates are taken against the window's inner size, not the canvas,
/// so the camera follows the pointer anywhere on the page.
pub fn wire_pointer_move(stage: SharedStage) {
    let Some(wnd) = web::window() else {
        return;
    };
    let wnd_for_size = wnd.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let Some((vw, vh)) = dom::viewport_size(&wnd_for_size) else {
            return;
        };
        stage
            .borrow_mut()
            .pointer_moved(ev.client_x() as f32, ev.client_y() as f32, vw, vh);
    }) as Box<dyn FnMut(_)>);

    _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}
