//! Bounded back-and-forth oscillators and the two-axis mesh sway built on them.

use crate::constants::{
    AXIS_BACKWARD, AXIS_UP, SWAY_BACK_BOUND_RATIO, SWAY_BACK_STEP_RATIO, SWAY_BOUND, SWAY_STEP,
};
use crate::scene::{MeshHandle, SceneHost};
use crate::scheduler::{FrameInput, FrameTask};
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Reverse => -1.0,
        }
    }

    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OscillatorParams {
    /// Angle change per tick (radians).
    pub step: f32,
    /// Maximum absolute angle before the direction reverses (radians, > 0).
    pub bound: f32,
}

impl OscillatorParams {
    /// Derived instance with both step and bound scaled.
    pub fn scaled(&self, step_ratio: f32, bound_ratio: f32) -> Self {
        Self {
            step: self.step * step_ratio,
            bound: self.bound * bound_ratio,
        }
    }
}

/// Angle that walks by a fixed step and reverses once it reaches its bound.
///
/// The angle is not clamped: on the reversal tick it may sit up to one step
/// past the bound, and the next tick walks it back inside.
#[derive(Clone, Debug)]
pub struct BoundedOscillator {
    params: OscillatorParams,
    angle: f32,
    direction: Direction,
}

impl BoundedOscillator {
    pub fn new(params: OscillatorParams) -> Self {
        Self {
            params,
            angle: 0.0,
            direction: Direction::Forward,
        }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Advance one tick. Returns the rotation increment for this tick, taken
    /// with the direction after any reversal.
    pub fn tick(&mut self) -> f32 {
        self.angle += self.params.step * self.direction.sign();
        if self.angle.abs() >= self.params.bound {
            self.direction = self.direction.flipped();
        }
        self.params.step * self.direction.sign()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwayParams {
    pub up: OscillatorParams,
    pub backward: OscillatorParams,
}

impl Default for SwayParams {
    fn default() -> Self {
        let up = OscillatorParams {
            step: SWAY_STEP,
            bound: SWAY_BOUND,
        };
        Self {
            up,
            backward: up.scaled(SWAY_BACK_STEP_RATIO, SWAY_BACK_BOUND_RATIO),
        }
    }
}

/// Two oscillators nodding a mesh about the up and backward axes.
#[derive(Clone, Debug)]
pub struct MeshSway {
    mesh: MeshHandle,
    up: BoundedOscillator,
    backward: BoundedOscillator,
}

impl MeshSway {
    pub fn new(mesh: MeshHandle, params: SwayParams) -> Self {
        Self {
            mesh,
            up: BoundedOscillator::new(params.up),
            backward: BoundedOscillator::new(params.backward),
        }
    }

    pub fn mesh(&self) -> MeshHandle {
        self.mesh
    }

    pub fn up(&self) -> &BoundedOscillator {
        &self.up
    }

    pub fn backward(&self) -> &BoundedOscillator {
        &self.backward
    }

    /// Advance both oscillators; returns `(axis, increment)` pairs in the order they apply.
    pub fn tick(&mut self) -> [(Vec3, f32); 2] {
        let up = self.up.tick();
        let back = self.backward.tick();
        [(AXIS_UP, up), (AXIS_BACKWARD, back)]
    }
}

impl<H: SceneHost> FrameTask<H> for MeshSway {
    fn run(&mut self, host: &mut H, _input: &FrameInput) {
        for (axis, angle) in self.tick() {
            host.rotate_mesh(self.mesh, axis, angle);
        }
    }
}
