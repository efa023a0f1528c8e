use glam::Vec3;
use std::f32::consts::PI;
use std::time::Duration;

// Shared scene/animation tuning constants used by the web frontend and the harness.

// Camera follow
pub const FOLLOW_HORIZONTAL_RANGE: f32 = 5.0; // world units at pointer x = ±1
pub const FOLLOW_VERTICAL_RANGE: f32 = 3.0; // world units at pointer y = ±1 (inverted)
pub const FOLLOW_DAMPING: f32 = 0.05; // fraction of remaining distance closed per frame

// Mesh sway
pub const SWAY_STEP: f32 = 0.0005; // radians per frame
pub const SWAY_BOUND: f32 = PI / 16.0;
pub const SWAY_BACK_STEP_RATIO: f32 = 0.7; // keeps the two axes out of phase
pub const SWAY_BACK_BOUND_RATIO: f32 = 0.8;

// Axes (left-handed, +z into the screen)
pub const AXIS_UP: Vec3 = Vec3::Y;
pub const AXIS_BACKWARD: Vec3 = Vec3::NEG_Z;

// Initial yaw applied to the splat mesh once it is installed
pub const MESH_INITIAL_YAW: f32 = PI / 2.0;

// Scene layout
pub const CAMERA_START: Vec3 = Vec3::new(0.0, 0.0, -6.0);
pub const CAMERA_FOVY_RADIANS: f32 = 0.8;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Keyboard dolly (arrow up/down move the camera along z while held)
pub const DOLLY_STEP: f32 = 0.1; // world units per frame
pub const DOLLY_NEAREST_Z: f32 = -1.0; // stays in front of the plane at z = 0
pub const DOLLY_FARTHEST_Z: f32 = -50.0;
pub const LIGHT_DIRECTION: Vec3 = Vec3::Y;
pub const LIGHT_INTENSITY: f32 = 1.0;
pub const PLANE_SIZE: f32 = 50.0;
pub const PLANE_DIFFUSE: [f32; 3] = [0.0, 0.0, 0.0]; // black material
pub const CLEAR_COLOR: [f32; 3] = [0.2, 0.2, 0.3];

// Asset
pub const ASSET_DIR: &str = "./";
pub const ASSET_FILE: &str = "ile.splat";
pub const ASSET_LOAD_TIMEOUT: Duration = Duration::from_secs(30);
