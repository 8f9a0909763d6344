use super::constants::{CLOUD_SPREAD, GRID_COLUMNS, GRID_SPACING};
use glam::Vec3;
use rand::Rng;

/// Arrangement applied to the whole gallery on user command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// Random positions in a 20×20×20 cube around the origin. Re-applying
    /// shuffles again.
    Cloud,
    /// Three-column grid recentered on the origin, all planes at z = 0.
    Cross,
}

impl Layout {
    pub fn name(self) -> &'static str {
        match self {
            Layout::Cloud => "cloud",
            Layout::Cross => "cross",
        }
    }

    /// Target position for item `index` in a gallery of `count` items.
    pub fn position_for(self, index: usize, count: usize, rng: &mut impl Rng) -> Vec3 {
        match self {
            Layout::Cloud => random_cloud(index, count, rng),
            Layout::Cross => grid_cross(index, count),
        }
    }
}

#[inline]
pub fn random_cloud(_index: usize, _count: usize, rng: &mut impl Rng) -> Vec3 {
    let mut axis = || (rng.gen::<f32>() - 0.5) * CLOUD_SPREAD;
    let x = axis();
    let y = axis();
    let z = axis();
    Vec3::new(x, y, z)
}

/// Rows start at y = -6 and keep stacking upward; galleries past nine items
/// extend above the cross.
#[inline]
pub fn grid_cross(index: usize, _count: usize) -> Vec3 {
    let row = (index / GRID_COLUMNS) as f32 - 1.0;
    let col = (index % GRID_COLUMNS) as f32 - 1.0;
    Vec3::new(col * GRID_SPACING, row * GRID_SPACING, 0.0)
}
