use crate::dom;
use crate::overlay;
use crate::render::GpuHost;
use instant::Instant;
use stage_core::{AssetStatus, Stage};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedStage = Rc<RefCell<Stage<GpuHost>>>;

#[derive(Clone, Copy, PartialEq, Eq)]
enum ShownStatus {
    Loading,
    Hidden,
    Failed,
}

pub struct FrameContext {
    pub stage: SharedStage,
    pub started: Instant,
    shown: ShownStatus,
}

impl FrameContext {
    pub fn new(stage: SharedStage, started: Instant) -> Self {
        Self {
            stage,
            started,
            shown: ShownStatus::Loading,
        }
    }

    pub fn frame(&mut self) {
        let elapsed = self.started.elapsed();
        let status = {
            let mut stage = self.stage.borrow_mut();
            if let Err(e) = stage.frame(elapsed) {
                log::error!("render error: {}", e);
            }
            stage.asset_status().clone()
        };
        self.sync_status(&status);
    }

    /// Reflect the asset gate in the status overlay, touching the DOM only on change.
    fn sync_status(&mut self, status: &AssetStatus) {
        let next = match status {
            AssetStatus::Pending => ShownStatus::Loading,
            AssetStatus::Ready(_) => ShownStatus::Hidden,
            AssetStatus::Failed(_) => ShownStatus::Failed,
        };
        if next == self.shown {
            return;
        }
        self.shown = next;
        let Some(document) = dom::window_document() else {
            return;
        };
        match status {
            AssetStatus::Failed(e) => overlay::show_status(&document, &e.to_string()),
            _ => overlay::hide_status(&document),
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
