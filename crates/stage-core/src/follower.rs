//! Pointer-to-camera follower.
//!
//! The camera glides toward a target derived from the pointer with a fixed
//! per-frame damping factor: the remaining error shrinks by `(1 - damping)`
//! every frame, so a fixed target is approached monotonically without
//! overshoot.

use crate::constants::{FOLLOW_DAMPING, FOLLOW_HORIZONTAL_RANGE, FOLLOW_VERTICAL_RANGE};
use crate::pointer::PointerState;
use crate::scene::SceneHost;
use crate::scheduler::{FrameInput, FrameTask};
use glam::{Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FollowParams {
    pub horizontal_range: f32,
    pub vertical_range: f32,
    pub damping: f32,
}

impl Default for FollowParams {
    fn default() -> Self {
        Self {
            horizontal_range: FOLLOW_HORIZONTAL_RANGE,
            vertical_range: FOLLOW_VERTICAL_RANGE,
            damping: FOLLOW_DAMPING,
        }
    }
}

impl FollowParams {
    /// Camera `(x, y)` the follower converges to for a given pointer.
    ///
    /// The vertical axis is inverted: pointer down moves the camera down.
    #[inline]
    pub fn target(&self, pointer: PointerState) -> Vec2 {
        Vec2::new(
            pointer.x * self.horizontal_range,
            pointer.y * -self.vertical_range,
        )
    }
}

#[derive(Clone, Debug)]
pub struct CameraFollower {
    params: FollowParams,
    position: Vec2,
}

impl CameraFollower {
    pub fn new(params: FollowParams, start: Vec2) -> Self {
        Self {
            params,
            position: start,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Advance one frame toward the pointer's target and return the new position.
    pub fn step(&mut self, pointer: PointerState) -> Vec2 {
        let target = self.params.target(pointer);
        self.position += (target - self.position) * self.params.damping;
        self.position
    }
}

impl<H: SceneHost> FrameTask<H> for CameraFollower {
    fn run(&mut self, host: &mut H, input: &FrameInput) {
        let xy = self.step(input.pointer);
        let z = host.camera_position().z;
        host.set_camera_position(Vec3::new(xy.x, xy.y, z));
        host.set_camera_target(Vec3::ZERO);
    }
}
