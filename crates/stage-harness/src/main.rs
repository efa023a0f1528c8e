//! Headless driver for the stage core.
//! Usage: cargo run -p stage-harness -- --frames 1200 --seed 7 --load-at 90

use std::env;
use std::time::Duration;

use anyhow::Context;
use glam::{Quat, Vec3};
use rand::prelude::*;
use stage_core::{MeshHandle, SceneHost, Stage, StageError, StageParams};

const FRAME_DT: Duration = Duration::from_micros(16_667);
const VIEWPORT: (f32, f32) = (1280.0, 720.0);

struct HarnessArgs {
    frames: u64,
    seed: u64,
    load_at: u64,
    fail_load: bool,
    trace_every: u64,
}

impl Default for HarnessArgs {
    fn default() -> Self {
        Self {
            frames: 1200,
            seed: 42,
            load_at: 60,
            fail_load: false,
            trace_every: 120,
        }
    }
}

fn flag_value(args: &[String], name: &str) -> Option<String> {
    args.iter().skip_while(|a| a.as_str() != name).nth(1).cloned()
}

fn parse_args(args: &[String]) -> anyhow::Result<HarnessArgs> {
    let mut out = HarnessArgs::default();
    if let Some(v) = flag_value(args, "--frames") {
        out.frames = v.parse().with_context(|| format!("--frames {v}"))?;
    }
    if let Some(v) = flag_value(args, "--seed") {
        out.seed = v.parse().with_context(|| format!("--seed {v}"))?;
    }
    if let Some(v) = flag_value(args, "--load-at") {
        out.load_at = v.parse().with_context(|| format!("--load-at {v}"))?;
    }
    if let Some(v) = flag_value(args, "--trace-every") {
        out.trace_every = v
            .parse::<u64>()
            .with_context(|| format!("--trace-every {v}"))?
            .max(1);
    }
    out.fail_load = args.iter().any(|a| a == "--fail-load");
    Ok(out)
}

/// Host that keeps transforms in memory and counts draws.
#[derive(Default)]
struct TraceHost {
    camera: Vec3,
    target: Vec3,
    meshes: Vec<(Quat, Vec3)>,
    viewport: (u32, u32),
    draws: u64,
}

impl SceneHost for TraceHost {
    /// Number of splats in the simulated asset.
    type Asset = usize;

    fn camera_position(&self) -> Vec3 {
        self.camera
    }

    fn set_camera_position(&mut self, position: Vec3) {
        self.camera = position;
    }

    fn set_camera_target(&mut self, target: Vec3) {
        self.target = target;
    }

    fn install_mesh(&mut self, splats: usize) -> Result<MeshHandle, StageError> {
        if splats == 0 {
            return Err(StageError::AssetLoad("empty point cloud".into()));
        }
        self.meshes.push((Quat::IDENTITY, Vec3::ZERO));
        Ok(MeshHandle(self.meshes.len() as u32 - 1))
    }

    fn rotate_mesh(&mut self, mesh: MeshHandle, axis: Vec3, angle: f32) {
        if let Some((rot, _)) = self.meshes.get_mut(mesh.0 as usize) {
            *rot = (*rot * Quat::from_axis_angle(axis, angle)).normalize();
        }
    }

    fn set_mesh_position(&mut self, mesh: MeshHandle, position: Vec3) {
        if let Some((_, pos)) = self.meshes.get_mut(mesh.0 as usize) {
            *pos = position;
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
    }

    fn render(&mut self) -> Result<(), StageError> {
        self.draws += 1;
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let raw: Vec<String> = env::args().collect();
    let args = parse_args(&raw)?;
    log::info!(
        "[harness] frames={} seed={} load_at={} fail_load={}",
        args.frames,
        args.seed,
        args.load_at,
        args.fail_load
    );

    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut stage = Stage::new(TraceHost::default(), StageParams::default());
    stage.resize(VIEWPORT.0 as u32, VIEWPORT.1 as u32);

    // Pointer wanders in client space; a new heading every half second
    let mut client = [VIEWPORT.0 * 0.5, VIEWPORT.1 * 0.5];
    let mut heading = [0.0f32, 0.0f32];
    let mut elapsed = Duration::ZERO;

    for frame in 0..args.frames {
        if frame % 30 == 0 {
            heading = [rng.gen_range(-12.0..12.0), rng.gen_range(-8.0..8.0)];
        }
        client[0] = (client[0] + heading[0]).clamp(0.0, VIEWPORT.0);
        client[1] = (client[1] + heading[1]).clamp(0.0, VIEWPORT.1);
        stage.pointer_moved(client[0], client[1], VIEWPORT.0, VIEWPORT.1);

        if frame == args.load_at {
            let result = if args.fail_load {
                Err(StageError::AssetLoad("simulated import failure".into()))
            } else {
                Ok(rng.gen_range(10_000..200_000))
            };
            stage.resolve_asset(result);
        }

        if let Err(e) = stage.frame(elapsed) {
            log::error!("[harness] frame {}: {}", frame, e);
        }
        elapsed += FRAME_DT;

        if frame % args.trace_every == 0 {
            let host = stage.host();
            let p = stage.pointer();
            let sway = host
                .meshes
                .first()
                .map(|(rot, _)| {
                    let (y, x, z) = rot.to_euler(glam::EulerRot::YXZ);
                    format!("({:.4},{:.4},{:.4})", x, y, z)
                })
                .unwrap_or_else(|| "-".to_string());
            log::info!(
                "[harness] f={} pointer=({:.2},{:.2}) cam=({:.3},{:.3},{:.3}) mesh={}",
                frame,
                p.x,
                p.y,
                host.camera.x,
                host.camera.y,
                host.camera.z,
                sway
            );
        }
    }

    let host = stage.host();
    log::info!(
        "[harness] done: frames={} draws={} asset={:?} viewport={:?} look_at={:?}",
        stage.frames(),
        host.draws,
        stage.asset_status(),
        host.viewport,
        host.target
    );
    Ok(())
}
