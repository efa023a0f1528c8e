use crate::constants::{HIDDEN_CLASS, STATUS_OVERLAY_ID};
use web_sys as web;

/// Show a status message (e.g. a failed asset load) over the canvas.
pub fn show_status(document: &web::Document, message: &str) {
    if let Some(el) = document.get_element_by_id(STATUS_OVERLAY_ID) {
        el.set_text_content(Some(message));
        _ = el.class_list().remove_1(HIDDEN_CLASS);
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide_status(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(STATUS_OVERLAY_ID) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}
