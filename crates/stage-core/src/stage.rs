use crate::asset::{AssetParams, AssetStatus};
use crate::constants::{AXIS_UP, MESH_INITIAL_YAW};
use crate::dolly::{CameraDolly, DollyKey, DollyParams};
use crate::error::StageError;
use crate::follower::{CameraFollower, FollowParams};
use crate::oscillator::{MeshSway, SwayParams};
use crate::pointer::PointerState;
use crate::scene::{SceneHost, SceneSetup};
use crate::scheduler::{FrameScheduler, Phase};
use glam::Vec3;
use std::time::Duration;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StageParams {
    pub follow: FollowParams,
    pub dolly: DollyParams,
    pub sway: SwayParams,
    pub scene: SceneSetup,
    pub asset: AssetParams,
}

/// Frame driver: owns the host, the pointer state, the scheduler and the asset gate.
pub struct Stage<H: SceneHost> {
    host: H,
    params: StageParams,
    pointer: PointerState,
    dolly: CameraDolly,
    scheduler: FrameScheduler<H>,
    asset: AssetStatus,
}

impl<H: SceneHost> Stage<H> {
    pub fn new(mut host: H, params: StageParams) -> Self {
        let start = params.scene.camera_start;
        host.set_camera_position(start);
        host.set_camera_target(Vec3::ZERO);

        let mut scheduler = FrameScheduler::new();
        scheduler.add(
            Phase::Update,
            CameraFollower::new(params.follow, start.truncate()),
        );
        log::info!(
            "[stage] camera=({:.2},{:.2},{:.2}) asset={}",
            start.x,
            start.y,
            start.z,
            params.asset.url()
        );

        Self {
            host,
            params,
            pointer: PointerState::default(),
            dolly: CameraDolly::default(),
            scheduler,
            asset: AssetStatus::Pending,
        }
    }

    pub fn params(&self) -> &StageParams {
        &self.params
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn asset_status(&self) -> &AssetStatus {
        &self.asset
    }

    pub fn frames(&self) -> u64 {
        self.scheduler.frames()
    }

    pub fn scheduler(&self) -> &FrameScheduler<H> {
        &self.scheduler
    }

    /// Record a pointer move in client coordinates. Ignored for an empty viewport.
    pub fn pointer_moved(&mut self, client_x: f32, client_y: f32, viewport_w: f32, viewport_h: f32) {
        if let Some(p) = PointerState::from_client(client_x, client_y, viewport_w, viewport_h) {
            self.pointer = p;
        }
    }

    pub fn key_down(&mut self, key: DollyKey) {
        self.dolly.press(key);
    }

    pub fn key_up(&mut self, key: DollyKey) {
        self.dolly.release(key);
    }

    /// Focus lost: keyup events will not arrive, so drop every held key.
    pub fn release_keys(&mut self) {
        self.dolly.release_all();
    }

    /// Viewport change: only the host's projection cares.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.host.resize(width, height);
    }

    /// Deliver the result of the one-shot asset load.
    pub fn resolve_asset(&mut self, result: Result<H::Asset, StageError>) {
        if !self.asset.is_pending() {
            log::warn!("[asset] late resolution ignored (status {:?})", self.asset);
            return;
        }
        let installed = result.and_then(|asset| self.host.install_mesh(asset));
        match installed {
            Ok(mesh) => {
                self.host.rotate_mesh(mesh, AXIS_UP, MESH_INITIAL_YAW);
                self.host.set_mesh_position(mesh, Vec3::ZERO);
                self.scheduler
                    .add(Phase::BeforeRender, MeshSway::new(mesh, self.params.sway));
                log::info!("[asset] {} ready as {:?}", self.params.asset.file, mesh);
                self.asset = AssetStatus::Ready(mesh);
            }
            Err(e) => {
                log::error!("[asset] {}: {}", self.params.asset.file, e);
                self.asset = AssetStatus::Failed(e);
            }
        }
    }

    /// Run one frame. `elapsed` is the time since startup, used for the asset deadline.
    pub fn frame(&mut self, elapsed: Duration) -> Result<(), StageError> {
        if self.asset.is_pending() && elapsed >= self.params.asset.timeout {
            let e = StageError::AssetTimeout {
                path: self.params.asset.url(),
                waited: elapsed,
            };
            log::error!("[asset] {}", e);
            self.asset = AssetStatus::Failed(e);
        }
        let cam = self.host.camera_position();
        if let Some(z) = self.dolly.apply(&self.params.dolly, cam.z) {
            self.host.set_camera_position(Vec3::new(cam.x, cam.y, z));
        }
        self.scheduler.run_frame(&mut self.host, self.pointer)
    }
}
