use crate::constants::MAX_DRAG_STEP_PX;
use glam::Vec2;
use web_sys as web;

#[derive(Default, Clone, Copy)]
pub struct DragState {
    pub active: bool,
    pub last_x: f32,
    pub last_y: f32,
}

impl DragState {
    /// Move the drag anchor and return the clamped delta since the last event.
    pub fn advance(&mut self, x: f32, y: f32) -> Vec2 {
        let dx = (x - self.last_x).clamp(-MAX_DRAG_STEP_PX, MAX_DRAG_STEP_PX);
        let dy = (y - self.last_y).clamp(-MAX_DRAG_STEP_PX, MAX_DRAG_STEP_PX);
        self.last_x = x;
        self.last_y = y;
        Vec2::new(dx, dy)
    }

    /// End the drag; later moves are ignored until the next press.
    pub fn release(&mut self) {
        self.active = false;
    }
}

/// Pointer position in CSS pixels relative to the canvas' top-left corner.
#[inline]
pub fn mouse_canvas_css(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    Vec2::new(x_css, y_css)
}
