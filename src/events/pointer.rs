use super::CommandQueue;
use crate::core::Command;
use crate::dom;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub queue: CommandQueue,
    pub drag_state: Rc<RefCell<input::DragState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_click(&w);
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
    wire_resize(&w);
}

fn wire_click(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let pos = input::mouse_canvas_css(&ev, &w.canvas);
        if pos.x.is_finite() && pos.y.is_finite() {
            w.queue
                .borrow_mut()
                .push(Command::PointerClick { x: pos.x, y: pos.y });
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::mouse_canvas_css(&ev, &w.canvas);
        {
            let mut ds = w.drag_state.borrow_mut();
            ds.active = true;
            ds.last_x = pos.x;
            ds.last_y = pos.y;
        }
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !w.drag_state.borrow().active {
            return;
        }
        let pos = input::mouse_canvas_css(&ev, &w.canvas);
        let delta = w.drag_state.borrow_mut().advance(pos.x, pos.y);
        if delta.x != 0.0 || delta.y != 0.0 {
            w.queue.borrow_mut().push(Command::Orbit {
                dx: delta.x,
                dy: delta.y,
            });
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

// Touch devices may cancel instead of lifting, so both events end the drag.
fn wire_pointerup(w: &InputWiring) {
    for event in ["pointerup", "pointercancel"] {
        let w = w.clone();

        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
                w.drag_state.borrow_mut().release();
                _ = w.canvas.release_pointer_capture(ev.pointer_id());
            }) as Box<dyn FnMut(_)>);

        if let Some(wnd) = web::window() {
            _ = wnd.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }

        closure.forget();
    }
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let delta_y = ev.delta_y() as f32;
        if delta_y != 0.0 {
            w.queue.borrow_mut().push(Command::Zoom { delta_y });
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}

// Window resize: keep the backing store crisp and tell the camera about the new aspect.
fn wire_resize(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&w.canvas);
        let (width, height) = dom::canvas_css_size(&w.canvas);
        w.queue
            .borrow_mut()
            .push(Command::Resize { width, height });
    }) as Box<dyn FnMut()>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
