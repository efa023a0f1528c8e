// Recording host shared by the stage/scheduler tests.
#![allow(dead_code)]

use glam::Vec3;
use stage_core::{MeshHandle, SceneHost, StageError};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    CameraPosition(Vec3),
    CameraTarget(Vec3),
    Install(usize),
    Rotate(MeshHandle, Vec3, f32),
    MeshPosition(MeshHandle, Vec3),
    Resize(u32, u32),
    Render,
}

#[derive(Default)]
pub struct RecordingHost {
    pub camera: Vec3,
    pub calls: Vec<Call>,
    pub fail_render: bool,
}

impl RecordingHost {
    pub fn renders(&self) -> usize {
        self.calls.iter().filter(|c| **c == Call::Render).count()
    }

    pub fn rotations(&self) -> Vec<(Vec3, f32)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Rotate(_, axis, angle) => Some((*axis, *angle)),
                _ => None,
            })
            .collect()
    }
}

impl SceneHost for RecordingHost {
    type Asset = usize;

    fn camera_position(&self) -> Vec3 {
        self.camera
    }

    fn set_camera_position(&mut self, position: Vec3) {
        self.camera = position;
        self.calls.push(Call::CameraPosition(position));
    }

    fn set_camera_target(&mut self, target: Vec3) {
        self.calls.push(Call::CameraTarget(target));
    }

    fn install_mesh(&mut self, splats: usize) -> Result<MeshHandle, StageError> {
        if splats == 0 {
            return Err(StageError::AssetLoad("empty".into()));
        }
        self.calls.push(Call::Install(splats));
        Ok(MeshHandle(7))
    }

    fn rotate_mesh(&mut self, mesh: MeshHandle, axis: Vec3, angle: f32) {
        self.calls.push(Call::Rotate(mesh, axis, angle));
    }

    fn set_mesh_position(&mut self, mesh: MeshHandle, position: Vec3) {
        self.calls.push(Call::MeshPosition(mesh, position));
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.calls.push(Call::Resize(width, height));
    }

    fn render(&mut self) -> Result<(), StageError> {
        self.calls.push(Call::Render);
        if self.fail_render {
            return Err(StageError::Render("device lost".into()));
        }
        Ok(())
    }
}
