//! The host side of the stage: whatever owns the real scene graph.
//!
//! The core never draws. It drives a [`SceneHost`] through camera and mesh
//! transforms and asks it to render once per frame. The browser front end
//! implements this on WebGPU, the harness on a tracing stub.

use crate::constants::*;
use crate::error::StageError;
use glam::Vec3;

/// Opaque id of a mesh installed in a host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub u32);

pub trait SceneHost {
    /// What a completed asset load hands to the host.
    type Asset;

    fn camera_position(&self) -> Vec3;
    fn set_camera_position(&mut self, position: Vec3);
    fn set_camera_target(&mut self, target: Vec3);

    fn install_mesh(&mut self, asset: Self::Asset) -> Result<MeshHandle, StageError>;
    /// Rotate relative to the mesh's current orientation (local space).
    fn rotate_mesh(&mut self, mesh: MeshHandle, axis: Vec3, angle: f32);
    fn set_mesh_position(&mut self, mesh: MeshHandle, position: Vec3);

    fn resize(&mut self, width: u32, height: u32);
    fn render(&mut self) -> Result<(), StageError>;
}

/// Static scene contents a host builds before the first frame.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneSetup {
    pub camera_start: Vec3,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
    /// Hemispheric light: sky direction and intensity; the ground color is black.
    pub light_direction: Vec3,
    pub light_intensity: f32,
    pub plane_size: f32,
    pub plane_diffuse: [f32; 3],
    pub clear_color: [f32; 3],
}

impl Default for SceneSetup {
    fn default() -> Self {
        Self {
            camera_start: CAMERA_START,
            fovy_radians: CAMERA_FOVY_RADIANS,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
            light_direction: LIGHT_DIRECTION,
            light_intensity: LIGHT_INTENSITY,
            plane_size: PLANE_SIZE,
            plane_diffuse: PLANE_DIFFUSE,
            clear_color: CLEAR_COLOR,
        }
    }
}
