//! Keyboard dolly for the camera.
//!
//! While an arrow key is held the camera moves along z by a fixed step per
//! frame. The follower only owns `(x, y)`, so the new depth sticks.

use crate::constants::{DOLLY_FARTHEST_Z, DOLLY_NEAREST_Z, DOLLY_STEP};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DollyKey {
    /// Toward the scene (+z).
    Forward,
    Backward,
}

impl DollyKey {
    /// Map a `KeyboardEvent.key` value.
    #[inline]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Self::Forward),
            "ArrowDown" => Some(Self::Backward),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DollyParams {
    pub step: f32,
    pub nearest_z: f32,
    pub farthest_z: f32,
}

impl Default for DollyParams {
    fn default() -> Self {
        Self {
            step: DOLLY_STEP,
            nearest_z: DOLLY_NEAREST_Z,
            farthest_z: DOLLY_FARTHEST_Z,
        }
    }
}

/// Held arrow keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CameraDolly {
    forward: bool,
    backward: bool,
}

impl CameraDolly {
    pub fn press(&mut self, key: DollyKey) {
        self.set(key, true);
    }

    pub fn release(&mut self, key: DollyKey) {
        self.set(key, false);
    }

    pub fn release_all(&mut self) {
        *self = Self::default();
    }

    fn set(&mut self, key: DollyKey, held: bool) {
        match key {
            DollyKey::Forward => self.forward = held,
            DollyKey::Backward => self.backward = held,
        }
    }

    /// `+1` forward, `-1` backward, `0` when idle or both keys are held.
    pub fn direction(&self) -> f32 {
        (self.forward as i8 - self.backward as i8) as f32
    }

    /// New camera depth for this frame, or `None` when no key moves it.
    pub fn apply(&self, params: &DollyParams, z: f32) -> Option<f32> {
        let dir = self.direction();
        if dir == 0.0 {
            return None;
        }
        Some((z + dir * params.step).clamp(params.farthest_z, params.nearest_z))
    }
}
