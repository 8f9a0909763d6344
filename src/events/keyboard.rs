use super::CommandQueue;
use crate::core::Command;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    queue: &CommandQueue,
    canvas: &web::HtmlCanvasElement,
) {
    let key = ev.key();
    if let Some(cmd) = Command::for_key(&key) {
        queue.borrow_mut().push(cmd);
        return;
    }
    match key.as_str() {
        "Enter" => {
            if let Some(win) = web::window() {
                if let Some(doc) = win.document() {
                    if doc.fullscreen_element().is_some() {
                        _ = doc.exit_fullscreen();
                    } else {
                        _ = canvas.request_fullscreen();
                    }
                }
            }
            ev.prevent_default();
        }
        "Escape" => {
            if let Some(win) = web::window() {
                if let Some(doc) = win.document() {
                    _ = doc.exit_fullscreen();
                }
            }
        }
        _ => {}
    }
}

pub fn wire_global_keydown(queue: CommandQueue, canvas: web::HtmlCanvasElement) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &queue, &canvas);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
