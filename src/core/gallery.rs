use super::layout::Layout;
use glam::Vec3;
use rand::prelude::*;
use serde::Deserialize;

/// One manifest entry, as authored.
#[derive(Clone, Debug, Deserialize)]
pub struct ItemConfig {
    #[serde(alias = "path")]
    pub image: String,
    pub title: String,
    #[serde(alias = "desc", default)]
    pub description: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("gallery configuration is empty")]
    Empty,
    #[error("gallery manifest is malformed: {0}")]
    Malformed(String),
    #[error("gallery item {index} has no image reference")]
    MissingImage { index: usize },
}

#[derive(Clone, Debug)]
pub struct GalleryItem {
    pub id: usize,
    pub image_ref: String,
    pub title: String,
    pub description: String,
    pub position: Vec3,
    pub rotation: Vec3,
}

pub struct Gallery {
    items: Vec<GalleryItem>,
    rng: StdRng,
}

/// Parse and validate a JSON manifest (an array of item objects).
pub fn parse_manifest(json: &str) -> Result<Vec<ItemConfig>, ConfigError> {
    let configs: Vec<ItemConfig> =
        serde_json::from_str(json).map_err(|e| ConfigError::Malformed(e.to_string()))?;
    validate(&configs)?;
    Ok(configs)
}

fn validate(configs: &[ItemConfig]) -> Result<(), ConfigError> {
    if configs.is_empty() {
        return Err(ConfigError::Empty);
    }
    if let Some(index) = configs.iter().position(|c| c.image.trim().is_empty()) {
        return Err(ConfigError::MissingImage { index });
    }
    Ok(())
}

impl Gallery {
    /// Build the store; ids follow manifest order and the first arrangement is
    /// the cloud layout.
    pub fn new(configs: Vec<ItemConfig>, seed: u64) -> Result<Self, ConfigError> {
        validate(&configs)?;
        let mut rng = StdRng::seed_from_u64(seed);
        let count = configs.len();
        let items = configs
            .into_iter()
            .enumerate()
            .map(|(id, c)| GalleryItem {
                id,
                image_ref: c.image,
                title: c.title,
                description: c.description,
                position: Layout::Cloud.position_for(id, count, &mut rng),
                rotation: Vec3::ZERO,
            })
            .collect();
        Ok(Self { items, rng })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [GalleryItem] {
        &mut self.items
    }

    pub fn get(&self, id: usize) -> Option<&GalleryItem> {
        self.items.get(id)
    }

    /// Overwrite every item's position with the layout target.
    pub fn apply_layout(&mut self, layout: Layout) {
        let count = self.items.len();
        for item in &mut self.items {
            item.position = layout.position_for(item.id, count, &mut self.rng);
        }
    }
}
