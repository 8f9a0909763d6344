use super::constants::*;
use glam::{Mat4, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Unproject an NDC point on the far plane back to world space.
    pub fn unproject_far(&self, ndc_x: f32, ndc_y: f32) -> Vec3 {
        let inv = self.view_proj().inverse();
        let p = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        p.truncate() / p.w
    }
}

/// Orbit controller around a fixed target with damped rotation and wheel zoom.
///
/// Drag input accumulates into a pending spherical delta; each `update` applies
/// a `damping` fraction of it and lets the rest decay, so motion eases out
/// after the pointer is released.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub camera: Camera,
    azimuth: f32,
    polar: f32,
    distance: f32,
    pending_azimuth: f32,
    pending_polar: f32,
    damping: f32,
}

impl OrbitCamera {
    pub fn new(aspect: f32) -> Self {
        let mut orbit = Self {
            camera: Camera {
                eye: Vec3::new(0.0, 0.0, CAMERA_DISTANCE),
                target: Vec3::ZERO,
                up: Vec3::Y,
                aspect,
                fovy_radians: CAMERA_FOVY_DEG.to_radians(),
                znear: CAMERA_ZNEAR,
                zfar: CAMERA_ZFAR,
            },
            azimuth: 0.0,
            polar: std::f32::consts::FRAC_PI_2,
            distance: CAMERA_DISTANCE,
            pending_azimuth: 0.0,
            pending_polar: 0.0,
            damping: ORBIT_DAMPING,
        };
        orbit.sync_eye();
        orbit
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn set_aspect(&mut self, width: f32, height: f32) {
        self.camera.aspect = width.max(1.0) / height.max(1.0);
    }

    /// Queue a rotation from a pointer drag of `(dx, dy)` CSS pixels in a
    /// viewport `viewport_height` pixels tall.
    pub fn rotate(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        let tau = std::f32::consts::TAU;
        self.pending_azimuth -= tau * dx / h;
        self.pending_polar -= tau * dy / h;
    }

    /// Wheel zoom; positive `delta_y` moves away from the target.
    pub fn zoom(&mut self, delta_y: f32) {
        if delta_y > 0.0 {
            self.distance /= ORBIT_ZOOM_SCALE;
        } else if delta_y < 0.0 {
            self.distance *= ORBIT_ZOOM_SCALE;
        }
        self.distance = self.distance.clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
        self.sync_eye();
    }

    /// Per-frame step: apply the damped share of pending rotation.
    pub fn update(&mut self) {
        self.azimuth += self.pending_azimuth * self.damping;
        self.polar += self.pending_polar * self.damping;
        self.polar = self.polar.clamp(
            ORBIT_POLAR_EPSILON,
            std::f32::consts::PI - ORBIT_POLAR_EPSILON,
        );
        let keep = 1.0 - self.damping;
        self.pending_azimuth *= keep;
        self.pending_polar *= keep;
        self.sync_eye();
    }

    fn sync_eye(&mut self) {
        let (sin_p, cos_p) = self.polar.sin_cos();
        let (sin_a, cos_a) = self.azimuth.sin_cos();
        let offset = Vec3::new(sin_p * sin_a, cos_p, sin_p * cos_a) * self.distance;
        self.camera.eye = self.camera.target + offset;
    }
}
