#![cfg(target_arch = "wasm32")]
use crate::constants::CANVAS_ID;
use crate::frame::{FrameContext, SharedStage};
use crate::render::GpuHost;
use instant::Instant;
use stage_core::{Stage, StageParams};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod asset;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("stage-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
            if let Some(document) = dom::window_document() {
                overlay::show_status(&document, &format!("{:#}", e));
            }
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);

    let params = StageParams::default();
    let host = GpuHost::new(&canvas, params.scene.clone()).await?;
    let url = params.asset.url();
    let stage: SharedStage = Rc::new(RefCell::new(Stage::new(host, params)));

    events::wire_pointer_move(stage.clone());
    events::wire_resize(&canvas, stage.clone());
    events::wire_camera_keys(stage.clone());

    // One-shot import; the frame loop enforces the deadline if this never settles.
    // The deadline clock starts with the fetch, not with GPU setup.
    let started = Instant::now();
    let stage_for_load = stage.clone();
    spawn_local(async move {
        let result = asset::load_splat(&url).await;
        stage_for_load.borrow_mut().resolve_asset(result);
    });

    let frame_ctx = Rc::new(RefCell::new(FrameContext::new(stage, started)));
    frame::start_loop(frame_ctx);
    Ok(())
}
