// Front-end (DOM + renderer) constants. Scene tuning lives in `core::constants`.

// Page element ids
pub const CANVAS_ID: &str = "app-canvas";
pub const CROSS_BUTTON_ID: &str = "cross-btn";
pub const CLOUD_BUTTON_ID: &str = "cloud-btn";
pub const INFO_PANEL_ID: &str = "info-panel";
pub const INFO_TITLE_ID: &str = "image-title";
pub const INFO_DESC_ID: &str = "image-desc";

// Background
pub const CLEAR_COLOR: [f64; 3] = [0.03, 0.04, 0.08];

// Selected plane is drawn slightly brighter
pub const SELECTED_BRIGHTEN: f32 = 1.15;

// Textures
pub const MAX_TEXTURE_DIM: u32 = 2048; // larger images are downscaled before upload
pub const PLACEHOLDER_RGBA: [u8; 4] = [64, 70, 84, 255]; // shown until an image arrives

// Upper bound on pending orbit drag per pointer event (CSS px)
pub const MAX_DRAG_STEP_PX: f32 = 200.0;
