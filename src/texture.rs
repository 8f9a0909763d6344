use crate::constants::MAX_TEXTURE_DIM;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Decoded RGBA8 pixels ready for upload.
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Images that finished loading, keyed by item id. Drained by the frame loop.
pub type LoadedImages = Rc<RefCell<Vec<(usize, DecodedImage)>>>;

/// Take every image that has arrived since the last call.
pub fn take_loaded(loaded: &LoadedImages) -> Vec<(usize, DecodedImage)> {
    loaded.borrow_mut().drain(..).collect()
}

async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {}: {:?}", url, e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    if !resp.ok() {
        anyhow::bail!("HTTP {} for {}", resp.status(), url);
    }
    let buf_promise = resp
        .array_buffer()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let buf = JsFuture::from(buf_promise)
        .await
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

pub fn decode(bytes: &[u8]) -> anyhow::Result<DecodedImage> {
    let mut img = image::load_from_memory(bytes)?;
    if img.width() > MAX_TEXTURE_DIM || img.height() > MAX_TEXTURE_DIM {
        img = img.thumbnail(MAX_TEXTURE_DIM, MAX_TEXTURE_DIM);
    }
    let rgba = img.to_rgba8();
    Ok(DecodedImage {
        width: rgba.width(),
        height: rgba.height(),
        rgba: rgba.into_raw(),
    })
}

async fn load_image(url: &str) -> anyhow::Result<DecodedImage> {
    let bytes = fetch_bytes(url).await?;
    decode(&bytes)
}

/// Start loading every image in the background. Failures are logged and the
/// item keeps its placeholder texture.
pub fn spawn_loads(refs: Vec<(usize, String)>, loaded: LoadedImages) {
    for (id, url) in refs {
        let loaded = loaded.clone();
        spawn_local(async move {
            match load_image(&url).await {
                Ok(img) => {
                    log::info!("[texture] item {} loaded {}x{}", id, img.width, img.height);
                    loaded.borrow_mut().push((id, img));
                }
                Err(e) => log::warn!("[texture] item {} ({}) failed: {:?}", id, url, e),
            }
        });
    }
}
