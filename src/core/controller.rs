use super::camera::OrbitCamera;
use super::float;
use super::gallery::{ConfigError, Gallery, ItemConfig};
use super::layout::Layout;
use super::picker::{pick, pointer_to_ndc, Ray};

/// Everything the page can ask of the gallery. DOM callbacks only build these;
/// the frame loop feeds them to [`GalleryApp::dispatch`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    ApplyCross,
    ApplyCloud,
    /// Click position in CSS pixels relative to the canvas' top-left corner.
    PointerClick { x: f32, y: f32 },
    /// New viewport size in CSS pixels.
    Resize { width: f32, height: f32 },
    /// Pointer drag delta in CSS pixels.
    Orbit { dx: f32, dy: f32 },
    Zoom { delta_y: f32 },
}

impl Command {
    /// Keyboard shortcuts for the layout buttons.
    #[inline]
    pub fn for_key(key: &str) -> Option<Command> {
        match key {
            "g" | "G" => Some(Command::ApplyCross),
            "r" | "R" => Some(Command::ApplyCloud),
            _ => None,
        }
    }
}

/// Metadata surfaced to the info panel after a successful pick.
#[derive(Clone, Debug, PartialEq)]
pub struct Selected {
    pub id: usize,
    pub title: String,
    pub description: String,
}

pub struct GalleryApp {
    pub gallery: Gallery,
    pub orbit: OrbitCamera,
    selected: Option<usize>,
    viewport: (f32, f32),
}

impl GalleryApp {
    pub fn new(
        configs: Vec<ItemConfig>,
        seed: u64,
        width: f32,
        height: f32,
    ) -> Result<Self, ConfigError> {
        let gallery = Gallery::new(configs, seed)?;
        let mut orbit = OrbitCamera::new(1.0);
        orbit.set_aspect(width, height);
        Ok(Self {
            gallery,
            orbit,
            selected: None,
            viewport: (width.max(1.0), height.max(1.0)),
        })
    }

    pub fn selection(&self) -> Option<usize> {
        self.selected
    }

    pub fn viewport(&self) -> (f32, f32) {
        self.viewport
    }

    /// Apply one command. Returns the newly selected item when a click hits
    /// something; a miss keeps the previous selection and returns `None`.
    pub fn dispatch(&mut self, cmd: Command) -> Option<Selected> {
        match cmd {
            Command::ApplyCross => {
                self.gallery.apply_layout(Layout::Cross);
                log::info!("[layout] {}", Layout::Cross.name());
                None
            }
            Command::ApplyCloud => {
                self.gallery.apply_layout(Layout::Cloud);
                log::info!("[layout] {}", Layout::Cloud.name());
                None
            }
            Command::PointerClick { x, y } => self.click(x, y),
            Command::Resize { width, height } => {
                self.viewport = (width.max(1.0), height.max(1.0));
                self.orbit.set_aspect(width, height);
                None
            }
            Command::Orbit { dx, dy } => {
                self.orbit.rotate(dx, dy, self.viewport.1);
                None
            }
            Command::Zoom { delta_y } => {
                self.orbit.zoom(delta_y);
                None
            }
        }
    }

    fn click(&mut self, x: f32, y: f32) -> Option<Selected> {
        let (w, h) = self.viewport;
        let ndc = pointer_to_ndc(x, y, w, h);
        let ray = Ray::from_ndc(&self.orbit.camera, ndc);
        let hit = pick(&ray, self.gallery.items())?;
        self.selected = Some(hit);
        let item = self.gallery.get(hit)?;
        log::info!("[pick] item {} \"{}\"", item.id, item.title);
        Some(Selected {
            id: item.id,
            title: item.title.clone(),
            description: item.description.clone(),
        })
    }

    /// Per-frame simulation: float the planes, then ease the camera.
    pub fn tick(&mut self, now_ms: f64) {
        float::step(self.gallery.items_mut(), now_ms);
        self.orbit.update();
    }
}
