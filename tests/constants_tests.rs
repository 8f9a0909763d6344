// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn plane_and_layout_sizes_fit_together() {
    assert_eq!(PLANE_HALF_EXTENT * 2.0, PLANE_SIZE);
    // Grid neighbours never overlap
    assert!(GRID_SPACING > PLANE_SIZE);
    assert_eq!(GRID_COLUMNS, 3);
    assert!(CLOUD_SPREAD > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_sees_the_whole_cloud() {
    assert!(CAMERA_ZNEAR > 0.0);
    assert!(CAMERA_ZFAR > CAMERA_DISTANCE + CLOUD_SPREAD);
    assert!(CAMERA_FOVY_DEG > 0.0 && CAMERA_FOVY_DEG < 180.0);
    assert!(ORBIT_MIN_DISTANCE < CAMERA_DISTANCE);
    assert!(ORBIT_MAX_DISTANCE > CAMERA_DISTANCE);
    assert!(ORBIT_MAX_DISTANCE + CLOUD_SPREAD < CAMERA_ZFAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn orbit_tuning_is_in_range() {
    assert!(ORBIT_DAMPING > 0.0 && ORBIT_DAMPING < 1.0);
    assert!(ORBIT_ZOOM_SCALE > 0.0 && ORBIT_ZOOM_SCALE < 1.0);
    assert!(ORBIT_POLAR_EPSILON > 0.0 && ORBIT_POLAR_EPSILON < 0.1);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn float_motion_is_gentle() {
    assert!(FLOAT_ROT_X_STEP > 0.0);
    assert_eq!(FLOAT_ROT_Y_STEP, FLOAT_ROT_X_STEP * 2.0);
    assert!(FLOAT_BOB_RATE > 0.0);
    assert!(FLOAT_BOB_AMPLITUDE < PLANE_HALF_EXTENT);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn front_end_constants_are_sane() {
    for c in CLEAR_COLOR {
        assert!((0.0..=1.0).contains(&c));
    }
    assert!(SELECTED_BRIGHTEN > 1.0);
    assert!(MAX_TEXTURE_DIM >= 256);
    assert_eq!(PLACEHOLDER_RGBA[3], 255);
    assert!(MAX_DRAG_STEP_PX > 0.0);
    let ids = [
        CANVAS_ID,
        CROSS_BUTTON_ID,
        CLOUD_BUTTON_ID,
        INFO_PANEL_ID,
        INFO_TITLE_ID,
        INFO_DESC_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
