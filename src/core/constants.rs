// Scene and interaction tuning shared by the core and the web front-end.

// Plane geometry (world units)
pub const PLANE_SIZE: f32 = 5.0;
pub const PLANE_HALF_EXTENT: f32 = PLANE_SIZE * 0.5;

// Cloud layout: each axis is drawn from [-CLOUD_SPREAD/2, CLOUD_SPREAD/2)
pub const CLOUD_SPREAD: f32 = 20.0;

// Cross layout: row-major grid recentered on the origin
pub const GRID_COLUMNS: usize = 3;
pub const GRID_SPACING: f32 = 6.0;

// Float animation, applied once per frame
pub const FLOAT_ROT_X_STEP: f32 = 0.001; // radians per frame
pub const FLOAT_ROT_Y_STEP: f32 = 0.002; // radians per frame
pub const FLOAT_BOB_RATE: f64 = 0.001; // sine phase per wall-clock millisecond
pub const FLOAT_BOB_AMPLITUDE: f32 = 0.01;

// Camera
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const CAMERA_DISTANCE: f32 = 30.0;

// Orbit controls
pub const ORBIT_DAMPING: f32 = 0.05; // fraction of the pending delta applied per frame
pub const ORBIT_ZOOM_SCALE: f32 = 0.95; // distance multiplier per wheel notch (zooming in)
pub const ORBIT_MIN_DISTANCE: f32 = 5.0;
pub const ORBIT_MAX_DISTANCE: f32 = 200.0;
pub const ORBIT_POLAR_EPSILON: f32 = 1e-3; // keeps the eye off the poles
