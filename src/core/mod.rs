pub mod camera;
pub mod constants;
pub mod controller;
pub mod float;
pub mod gallery;
pub mod layout;
pub mod picker;

pub use camera::*;
pub use constants::*;
pub use controller::*;
pub use gallery::*;
pub use layout::*;
pub use picker::*;

// Shader and manifest bundled as string constants
pub static GALLERY_WGSL: &str = include_str!("../../shaders/gallery.wgsl");
pub static GALLERY_MANIFEST: &str = include_str!("../../assets/gallery.json");
