//! Cooperative single-threaded frame scheduler.
//!
//! Each frame runs the `Update` tasks, then the `BeforeRender` tasks, each
//! in registration order, and finally asks the host to render.

use crate::error::StageError;
use crate::pointer::PointerState;
use crate::scene::SceneHost;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Update,
    BeforeRender,
}

/// Per-frame values handed to every task.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub index: u64,
    pub pointer: PointerState,
}

pub trait FrameTask<H> {
    fn run(&mut self, host: &mut H, input: &FrameInput);
}

impl<H, F> FrameTask<H> for F
where
    F: FnMut(&mut H, &FrameInput),
{
    fn run(&mut self, host: &mut H, input: &FrameInput) {
        self(host, input)
    }
}

pub struct FrameScheduler<H> {
    update: Vec<Box<dyn FrameTask<H>>>,
    before_render: Vec<Box<dyn FrameTask<H>>>,
    frames: u64,
}

impl<H> Default for FrameScheduler<H> {
    fn default() -> Self {
        Self {
            update: Vec::new(),
            before_render: Vec::new(),
            frames: 0,
        }
    }
}

impl<H: SceneHost> FrameScheduler<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, phase: Phase, task: impl FrameTask<H> + 'static) {
        let task: Box<dyn FrameTask<H>> = Box::new(task);
        match phase {
            Phase::Update => self.update.push(task),
            Phase::BeforeRender => self.before_render.push(task),
        }
    }

    pub fn task_count(&self, phase: Phase) -> usize {
        match phase {
            Phase::Update => self.update.len(),
            Phase::BeforeRender => self.before_render.len(),
        }
    }

    /// Number of frames run so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn run_frame(&mut self, host: &mut H, pointer: PointerState) -> Result<(), StageError> {
        let input = FrameInput {
            index: self.frames,
            pointer,
        };
        for task in &mut self.update {
            task.run(host, &input);
        }
        for task in &mut self.before_render {
            task.run(host, &input);
        }
        // counted even when the draw fails: the tasks above already ran
        self.frames += 1;
        host.render()
    }
}
