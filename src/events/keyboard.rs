use crate::frame::SharedStage;
use stage_core::DollyKey;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Arrow up/down dolly the camera while held. Other keys pass through.
pub fn wire_camera_keys(stage: SharedStage) {
    let Some(window) = web::window() else {
        return;
    };

    let stage_down = stage.clone();
    let keydown = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if let Some(key) = DollyKey::from_key(&ev.key()) {
            // arrows would otherwise scroll the page
            ev.prevent_default();
            stage_down.borrow_mut().key_down(key);
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
    keydown.forget();

    let stage_up = stage.clone();
    let keyup = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if let Some(key) = DollyKey::from_key(&ev.key()) {
            stage_up.borrow_mut().key_up(key);
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("keyup", keyup.as_ref().unchecked_ref());
    keyup.forget();

    let blur = Closure::wrap(Box::new(move || {
        stage.borrow_mut().release_keys();
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("blur", blur.as_ref().unchecked_ref());
    blur.forget();
}
