#![cfg(target_arch = "wasm32")]
use crate::core::{parse_manifest, Command, GalleryApp, GALLERY_MANIFEST};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;
mod texture;

fn wire_layout_buttons(document: &web::Document, queue: &events::CommandQueue) {
    let q = queue.clone();
    dom::add_click_listener(document, constants::CROSS_BUTTON_ID, move || {
        q.borrow_mut().push(Command::ApplyCross);
    });
    let q = queue.clone();
    dom::add_click_listener(document, constants::CLOUD_BUTTON_ID, move || {
        q.borrow_mut().push(Command::ApplyCloud);
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gallery-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // A bad manifest is fatal: nothing to show.
    let configs = parse_manifest(GALLERY_MANIFEST)?;
    log::info!("[gallery] {} items", configs.len());

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);
    let (css_w, css_h) = dom::canvas_css_size(&canvas);

    let app = Rc::new(RefCell::new(GalleryApp::new(
        configs,
        rand::random::<u64>(),
        css_w,
        css_h,
    )?));

    let queue: events::CommandQueue = Rc::new(RefCell::new(Vec::new()));
    wire_layout_buttons(&document, &queue);
    events::wire_global_keydown(queue.clone(), canvas.clone());
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        queue: queue.clone(),
        drag_state: Rc::new(RefCell::new(input::DragState::default())),
    });

    // Initialize WebGPU; without it the gallery still simulates and picks.
    let plane_count = app.borrow().gallery.len();
    let gpu: Option<render::GpuState> = frame::init_gpu(&canvas, plane_count).await;

    // Fire-and-forget texture loads; planes show a placeholder meanwhile
    let loaded_images: texture::LoadedImages = Rc::new(RefCell::new(Vec::new()));
    let refs: Vec<(usize, String)> = app
        .borrow()
        .gallery
        .items()
        .iter()
        .map(|item| (item.id, item.image_ref.clone()))
        .collect();
    if gpu.is_some() {
        texture::spawn_loads(refs, loaded_images.clone());
    } else {
        log::warn!("[texture] no renderer, skipping image loads");
    }

    // Scheduler + renderer loop driven by requestAnimationFrame
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        app,
        queue,
        loaded_images,
        document,
        canvas,
        gpu,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
