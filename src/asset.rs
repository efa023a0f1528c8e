use anyhow::{anyhow, bail};
use stage_core::StageError;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Fetch the splat file as raw bytes.
pub async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow!("fetch {}: {:?}", url, e))?;
    let resp: web::Response = resp
        .dyn_into()
        .map_err(|e| anyhow!("fetch {}: not a Response: {:?}", url, e))?;
    if !resp.ok() {
        bail!("fetch {}: HTTP {}", url, resp.status());
    }
    let promise = resp
        .array_buffer()
        .map_err(|e| anyhow!("{}: {:?}", url, e))?;
    let buf = JsFuture::from(promise)
        .await
        .map_err(|e| anyhow!("{}: {:?}", url, e))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

/// Fetch and convert failures into the stage's error type.
pub async fn load_splat(url: &str) -> Result<Vec<u8>, StageError> {
    let started = instant::Instant::now();
    let result = fetch_bytes(url)
        .await
        .map_err(|e| StageError::AssetLoad(format!("{:#}", e)));
    match &result {
        Ok(bytes) => log::info!(
            "[asset] fetched {} ({} bytes) in {:?}",
            url,
            bytes.len(),
            started.elapsed()
        ),
        Err(e) => log::error!("[asset] {}", e),
    }
    result
}
