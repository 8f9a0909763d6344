use crate::constants::SELECTED_BRIGHTEN;
use crate::core::{item_orientation, GalleryApp};
use crate::events::CommandQueue;
use crate::overlay;
use crate::render;
use crate::texture::{self, LoadedImages};
use glam::{Mat4, Vec4};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub app: Rc<RefCell<GalleryApp>>,
    pub queue: CommandQueue,
    pub loaded_images: LoadedImages,

    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,

    pub gpu: Option<render::GpuState<'a>>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        // Drain input first; callbacks never touch item state directly.
        let commands: Vec<_> = self.queue.borrow_mut().drain(..).collect();
        {
            let mut app = self.app.borrow_mut();
            for cmd in commands {
                if let Some(selected) = app.dispatch(cmd) {
                    overlay::show_selection(&self.document, &selected);
                }
            }
            app.tick(js_sys::Date::now());
        }

        // Drained even without a GPU so decoded pixels are not retained.
        let arrived = texture::take_loaded(&self.loaded_images);
        let Some(g) = &mut self.gpu else {
            return;
        };

        for (id, img) in arrived {
            g.set_plane_image(id, &img);
        }

        let app = self.app.borrow();
        let selected = app.selection();
        let instances: Vec<render::PlaneInstance> = app
            .gallery
            .items()
            .iter()
            .map(|item| {
                let tint = if selected == Some(item.id) {
                    Vec4::new(SELECTED_BRIGHTEN, SELECTED_BRIGHTEN, SELECTED_BRIGHTEN, 1.0)
                } else {
                    Vec4::ONE
                };
                render::PlaneInstance {
                    model: Mat4::from_rotation_translation(
                        item_orientation(item.rotation),
                        item.position,
                    ),
                    tint,
                }
            })
            .collect();
        let view_proj = app.orbit.camera.view_proj();
        drop(app);

        g.resize_if_needed(self.canvas.width(), self.canvas.height());
        match g.render(view_proj, &instances) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
            Err(e) => log::error!("[render] {:?}", e),
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    plane_count: usize,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, plane_count).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}
