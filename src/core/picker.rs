use super::camera::Camera;
use super::constants::PLANE_HALF_EXTENT;
use super::gallery::GalleryItem;
use glam::{EulerRot, Quat, Vec2, Vec3};

#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    /// World-space ray from the camera eye through an NDC point.
    pub fn from_ndc(camera: &Camera, ndc: Vec2) -> Self {
        let far = camera.unproject_far(ndc.x, ndc.y);
        Self {
            origin: camera.eye,
            dir: (far - camera.eye).normalize(),
        }
    }
}

/// Map a canvas-relative pointer position to normalized device coordinates.
#[inline]
pub fn pointer_to_ndc(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    let w = width.max(1.0);
    let h = height.max(1.0);
    Vec2::new((x / w) * 2.0 - 1.0, -(y / h) * 2.0 + 1.0)
}

#[inline]
pub fn item_orientation(rotation: Vec3) -> Quat {
    Quat::from_euler(EulerRot::XYZ, rotation.x, rotation.y, rotation.z)
}

/// Distance along `ray` to a square of half-size `half_extent` centered at
/// `center`, or `None` on a miss. Only the front face (local +Z) is hit;
/// back-facing planes let the ray through.
#[inline]
pub fn ray_rect(ray: &Ray, center: Vec3, orientation: Quat, half_extent: f32) -> Option<f32> {
    let normal = orientation * Vec3::Z;
    let denom = ray.dir.dot(normal);
    if denom > -1e-6 {
        return None;
    }
    let t = (center - ray.origin).dot(normal) / denom;
    if t <= 0.0 {
        return None;
    }
    let local = ray.origin + ray.dir * t - center;
    let u = local.dot(orientation * Vec3::X);
    let v = local.dot(orientation * Vec3::Y);
    (u.abs() <= half_extent && v.abs() <= half_extent).then_some(t)
}

/// Nearest item hit by `ray`, by index into `items`.
pub fn pick(ray: &Ray, items: &[GalleryItem]) -> Option<usize> {
    let mut best = None::<(usize, f32)>;
    for (i, item) in items.iter().enumerate() {
        let orientation = item_orientation(item.rotation);
        if let Some(t) = ray_rect(ray, item.position, orientation, PLANE_HALF_EXTENT) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best.map(|(i, _)| i)
}
