use super::constants::{FLOAT_BOB_AMPLITUDE, FLOAT_BOB_RATE, FLOAT_ROT_X_STEP, FLOAT_ROT_Y_STEP};
use super::gallery::GalleryItem;
use std::f32::consts::TAU;

/// Vertical nudge applied at wall-clock time `now_ms`, in [-0.01, 0.01].
#[inline]
pub fn bob_offset(now_ms: f64) -> f32 {
    ((now_ms * FLOAT_BOB_RATE).sin() as f32) * FLOAT_BOB_AMPLITUDE
}

/// Advance the idle float by one frame.
///
/// The bob is added to `position.y`, not assigned, so it accumulates on top of
/// whatever base position the last layout left behind.
pub fn step(items: &mut [GalleryItem], now_ms: f64) {
    let dy = bob_offset(now_ms);
    for item in items {
        item.rotation.x = spin(item.rotation.x, FLOAT_ROT_X_STEP);
        item.rotation.y = spin(item.rotation.y, FLOAT_ROT_Y_STEP);
        item.position.y += dy;
    }
}

// Angles stay in [0, TAU) so the f32 step never rounds away.
#[inline]
fn spin(angle: f32, step: f32) -> f32 {
    (angle.rem_euclid(TAU) + step).rem_euclid(TAU)
}
