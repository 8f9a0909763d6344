// Host-side tests for command dispatch, selection and the orbit camera.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod app_core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod layout {
        include!("../src/core/layout.rs");
    }
    pub mod gallery {
        include!("../src/core/gallery.rs");
    }
    pub mod float {
        include!("../src/core/float.rs");
    }
    pub mod camera {
        include!("../src/core/camera.rs");
    }
    pub mod picker {
        include!("../src/core/picker.rs");
    }
    pub mod controller {
        include!("../src/core/controller.rs");
    }
}

use app_core::constants::*;
use app_core::controller::*;
use app_core::gallery::{ConfigError, ItemConfig};
use glam::Vec3;

fn config(n: usize) -> Vec<ItemConfig> {
    (0..n)
        .map(|i| ItemConfig {
            image: format!("images/img{}.jpg", i + 1),
            title: format!("Imagen {}", i + 1),
            description: format!("Descripción {}", i + 1),
        })
        .collect()
}

fn single_item_at_origin() -> GalleryApp {
    let mut app = GalleryApp::new(config(1), 1, 800.0, 600.0).unwrap();
    app.gallery.items_mut()[0].position = Vec3::ZERO;
    app
}

#[test]
fn empty_configuration_fails_construction() {
    let err = GalleryApp::new(Vec::new(), 0, 800.0, 600.0).err().unwrap();
    assert!(matches!(err, ConfigError::Empty));
}

#[test]
fn keys_map_to_layout_commands() {
    assert_eq!(Command::for_key("g"), Some(Command::ApplyCross));
    assert_eq!(Command::for_key("G"), Some(Command::ApplyCross));
    assert_eq!(Command::for_key("r"), Some(Command::ApplyCloud));
    assert_eq!(Command::for_key("R"), Some(Command::ApplyCloud));
    assert_eq!(Command::for_key("Enter"), None);
    assert_eq!(Command::for_key("x"), None);
}

#[test]
fn apply_cross_command_arranges_the_grid() {
    let mut app = GalleryApp::new(config(3), 4, 800.0, 600.0).unwrap();
    assert_eq!(app.dispatch(Command::ApplyCross), None);
    let xs: Vec<_> = app.gallery.items().iter().map(|i| i.position).collect();
    assert_eq!(
        xs,
        vec![
            Vec3::new(-6.0, -6.0, 0.0),
            Vec3::new(0.0, -6.0, 0.0),
            Vec3::new(6.0, -6.0, 0.0),
        ]
    );
}

#[test]
fn apply_cloud_command_moves_items_inside_the_cube() {
    let mut app = GalleryApp::new(config(9), 4, 800.0, 600.0).unwrap();
    app.dispatch(Command::ApplyCross);
    app.dispatch(Command::ApplyCloud);
    for item in app.gallery.items() {
        for c in item.position.to_array() {
            assert!((-10.0..10.0).contains(&c));
        }
    }
}

#[test]
fn click_on_a_plane_selects_it() {
    let mut app = single_item_at_origin();
    assert_eq!(app.selection(), None);
    let selected = app
        .dispatch(Command::PointerClick { x: 400.0, y: 300.0 })
        .unwrap();
    assert_eq!(
        selected,
        Selected {
            id: 0,
            title: "Imagen 1".into(),
            description: "Descripción 1".into(),
        }
    );
    assert_eq!(app.selection(), Some(0));
}

#[test]
fn click_on_empty_space_keeps_the_previous_selection() {
    let mut app = single_item_at_origin();
    app.dispatch(Command::PointerClick { x: 400.0, y: 300.0 });
    assert_eq!(app.dispatch(Command::PointerClick { x: 0.0, y: 0.0 }), None);
    assert_eq!(app.selection(), Some(0));
}

#[test]
fn click_without_hit_leaves_selection_empty() {
    let mut app = single_item_at_origin();
    assert_eq!(
        app.dispatch(Command::PointerClick { x: 790.0, y: 10.0 }),
        None
    );
    assert_eq!(app.selection(), None);
}

#[test]
fn resize_updates_viewport_and_aspect() {
    let mut app = GalleryApp::new(config(1), 1, 800.0, 600.0).unwrap();
    app.dispatch(Command::Resize {
        width: 1024.0,
        height: 512.0,
    });
    assert_eq!(app.viewport(), (1024.0, 512.0));
    assert!((app.orbit.camera.aspect - 2.0).abs() < 1e-6);

    app.dispatch(Command::Resize {
        width: 0.0,
        height: 0.0,
    });
    assert_eq!(app.viewport(), (1.0, 1.0));
    assert!(app.orbit.camera.aspect.is_finite());
}

#[test]
fn orbit_drag_swings_the_eye_around_the_target() {
    let mut app = GalleryApp::new(config(1), 1, 800.0, 600.0).unwrap();
    app.dispatch(Command::Orbit { dx: 60.0, dy: 0.0 });
    for f in 0..30 {
        app.tick(f as f64 * 16.0);
    }
    let eye = app.orbit.camera.eye;
    assert!(eye.x < 0.0, "eye = {:?}", eye);
    assert!((eye.length() - CAMERA_DISTANCE).abs() < 1e-3);
}

#[test]
fn orbit_motion_eases_out() {
    let mut app = GalleryApp::new(config(1), 1, 800.0, 600.0).unwrap();
    app.dispatch(Command::Orbit { dx: 100.0, dy: 0.0 });
    let mut prev = app.orbit.camera.eye;
    let mut steps = Vec::new();
    for f in 0..5 {
        app.tick(f as f64 * 16.0);
        let eye = app.orbit.camera.eye;
        steps.push((eye - prev).length());
        prev = eye;
    }
    for pair in steps.windows(2) {
        assert!(pair[1] < pair[0]);
    }
}

#[test]
fn polar_angle_stays_clamped() {
    let mut app = GalleryApp::new(config(1), 1, 800.0, 600.0).unwrap();
    for _ in 0..50 {
        app.dispatch(Command::Orbit { dx: 0.0, dy: 5_000.0 });
        app.tick(0.0);
    }
    let eye = app.orbit.camera.eye;
    assert!(eye.is_finite());
    assert!(eye.y < CAMERA_DISTANCE);
    assert!(eye.y > CAMERA_DISTANCE * 0.99);
    assert!((eye.length() - CAMERA_DISTANCE).abs() < 1e-3);
}

#[test]
fn zoom_scales_and_clamps_distance() {
    let mut app = GalleryApp::new(config(1), 1, 800.0, 600.0).unwrap();
    app.dispatch(Command::Zoom { delta_y: -100.0 });
    assert!((app.orbit.distance() - CAMERA_DISTANCE * ORBIT_ZOOM_SCALE).abs() < 1e-4);
    app.dispatch(Command::Zoom { delta_y: 100.0 });
    assert!((app.orbit.distance() - CAMERA_DISTANCE).abs() < 1e-4);
    app.dispatch(Command::Zoom { delta_y: 0.0 });
    assert!((app.orbit.distance() - CAMERA_DISTANCE).abs() < 1e-4);

    for _ in 0..200 {
        app.dispatch(Command::Zoom { delta_y: -1.0 });
    }
    assert_eq!(app.orbit.distance(), ORBIT_MIN_DISTANCE);
    for _ in 0..200 {
        app.dispatch(Command::Zoom { delta_y: 1.0 });
    }
    assert_eq!(app.orbit.distance(), ORBIT_MAX_DISTANCE);
    assert!((app.orbit.camera.eye.length() - ORBIT_MAX_DISTANCE).abs() < 1e-2);
}

#[test]
fn tick_floats_every_plane() {
    let mut app = GalleryApp::new(config(4), 9, 800.0, 600.0).unwrap();
    app.tick(0.0);
    for item in app.gallery.items() {
        assert!((item.rotation.x - FLOAT_ROT_X_STEP).abs() < 1e-7);
        assert!((item.rotation.y - FLOAT_ROT_Y_STEP).abs() < 1e-7);
    }
}
