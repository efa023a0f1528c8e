// Host-side tests for the stage: camera setup, asset gate, resize, pointer wiring.

mod common;

use common::{Call, RecordingHost};
use glam::Vec3;
use stage_core::{
    AssetStatus, DollyKey, MeshHandle, Phase, Stage, StageError, StageParams, AXIS_UP,
    CAMERA_START, DOLLY_NEAREST_Z, DOLLY_STEP, MESH_INITIAL_YAW,
};
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

fn new_stage() -> Stage<RecordingHost> {
    Stage::new(RecordingHost::default(), StageParams::default())
}

#[test]
fn new_stage_places_camera_and_registers_follower() {
    let stage = new_stage();
    assert_eq!(
        stage.host().calls,
        vec![
            Call::CameraPosition(CAMERA_START),
            Call::CameraTarget(Vec3::ZERO)
        ]
    );
    assert_eq!(stage.scheduler().task_count(Phase::Update), 1);
    assert_eq!(stage.scheduler().task_count(Phase::BeforeRender), 0);
    assert!(stage.asset_status().is_pending());
}

#[test]
fn pointer_drives_camera_xy_and_keeps_z() {
    let mut stage = new_stage();
    stage.pointer_moved(1000.0, 1000.0, 1000.0, 1000.0);
    stage.frame(FRAME).unwrap();

    let cam = stage.host().camera;
    assert!((cam.x - 0.25).abs() < 1e-5);
    assert!((cam.y + 0.15).abs() < 1e-5);
    assert_eq!(cam.z, CAMERA_START.z);
    // look-at re-fixed to the origin every frame, before the draw
    let n = stage.host().calls.len();
    assert_eq!(stage.host().calls[n - 2], Call::CameraTarget(Vec3::ZERO));
    assert_eq!(stage.host().calls[n - 1], Call::Render);
}

#[test]
fn camera_stays_centered_before_any_pointer_event() {
    let mut stage = new_stage();
    for i in 0..30 {
        stage.frame(FRAME * i).unwrap();
    }
    assert_eq!(stage.host().camera, CAMERA_START);
}

#[test]
fn zero_viewport_pointer_event_is_ignored() {
    let mut stage = new_stage();
    stage.pointer_moved(100.0, 100.0, 200.0, 200.0);
    let before = stage.pointer();
    stage.pointer_moved(5.0, 5.0, 0.0, 0.0);
    assert_eq!(stage.pointer(), before);
}

#[test]
fn successful_load_installs_and_starts_sway() {
    let mut stage = new_stage();
    stage.resolve_asset(Ok(1024));

    assert_eq!(stage.asset_status(), &AssetStatus::Ready(MeshHandle(7)));
    assert_eq!(stage.scheduler().task_count(Phase::BeforeRender), 1);
    let tail: Vec<_> = stage.host().calls[2..].to_vec();
    assert_eq!(
        tail,
        vec![
            Call::Install(1024),
            Call::Rotate(MeshHandle(7), AXIS_UP, MESH_INITIAL_YAW),
            Call::MeshPosition(MeshHandle(7), Vec3::ZERO),
        ]
    );

    stage.frame(FRAME).unwrap();
    // initial yaw plus one up and one backward increment
    assert_eq!(stage.host().rotations().len(), 3);
}

#[test]
fn sway_runs_after_camera_update_each_frame() {
    let mut stage = new_stage();
    stage.resolve_asset(Ok(1));
    let start = stage.host().calls.len();
    stage.frame(FRAME).unwrap();

    let frame_calls = &stage.host().calls[start..];
    let kinds: Vec<&str> = frame_calls
        .iter()
        .map(|c| match c {
            Call::CameraPosition(_) => "camera",
            Call::CameraTarget(_) => "target",
            Call::Rotate(..) => "rotate",
            Call::Render => "render",
            _ => "other",
        })
        .collect();
    assert_eq!(kinds, vec!["camera", "target", "rotate", "rotate", "render"]);
}

#[test]
fn failed_load_never_starts_sway() {
    let mut stage = new_stage();
    stage.resolve_asset(Err(StageError::AssetLoad("404".into())));
    assert!(matches!(stage.asset_status(), AssetStatus::Failed(StageError::AssetLoad(_))));
    for i in 0..5 {
        stage.frame(FRAME * i).unwrap();
    }
    assert_eq!(stage.scheduler().task_count(Phase::BeforeRender), 0);
    assert!(stage.host().rotations().is_empty());
}

#[test]
fn install_error_marks_failed() {
    let mut stage = new_stage();
    stage.resolve_asset(Ok(0));
    assert!(matches!(stage.asset_status(), AssetStatus::Failed(_)));
    assert_eq!(stage.scheduler().task_count(Phase::BeforeRender), 0);
}

#[test]
fn pending_load_times_out_at_deadline() {
    let mut stage = new_stage();
    let timeout = stage.params().asset.timeout;

    stage.frame(timeout - FRAME).unwrap();
    assert!(stage.asset_status().is_pending());

    stage.frame(timeout).unwrap();
    match stage.asset_status() {
        AssetStatus::Failed(StageError::AssetTimeout { path, waited }) => {
            assert_eq!(path, "./ile.splat");
            assert_eq!(*waited, timeout);
        }
        other => panic!("expected timeout, got {other:?}"),
    }

    // later frames keep the first failure
    stage.frame(timeout * 2).unwrap();
    assert!(matches!(
        stage.asset_status(),
        AssetStatus::Failed(StageError::AssetTimeout { waited, .. }) if *waited == timeout
    ));
}

#[test]
fn late_resolution_after_timeout_is_dropped() {
    let mut stage = new_stage();
    let timeout = stage.params().asset.timeout;
    stage.frame(timeout).unwrap();
    stage.resolve_asset(Ok(64));

    assert!(matches!(stage.asset_status(), AssetStatus::Failed(_)));
    assert!(!stage.host().calls.contains(&Call::Install(64)));
    assert_eq!(stage.scheduler().task_count(Phase::BeforeRender), 0);
}

#[test]
fn loaded_asset_is_not_timed_out() {
    let mut stage = new_stage();
    stage.resolve_asset(Ok(8));
    stage.frame(stage.params().asset.timeout * 10).unwrap();
    assert_eq!(stage.asset_status().mesh(), Some(MeshHandle(7)));
}

#[test]
fn second_resolution_is_ignored() {
    let mut stage = new_stage();
    stage.resolve_asset(Ok(8));
    stage.resolve_asset(Ok(16));
    assert_eq!(stage.scheduler().task_count(Phase::BeforeRender), 1);
    assert!(!stage.host().calls.contains(&Call::Install(16)));
}

#[test]
fn resize_only_reaches_the_host() {
    let mut stage = new_stage();
    stage.pointer_moved(30.0, 40.0, 100.0, 100.0);
    stage.resolve_asset(Ok(4));
    for i in 0..10 {
        stage.frame(FRAME * i).unwrap();
    }
    let pointer = stage.pointer();
    let camera = stage.host().camera;
    let calls_before = stage.host().calls.len();

    stage.resize(1920, 1080);

    assert_eq!(stage.pointer(), pointer);
    assert_eq!(stage.host().camera, camera);
    assert_eq!(&stage.host().calls[calls_before..], &[Call::Resize(1920, 1080)]);
    assert_eq!(stage.frames(), 10);
}

#[test]
fn render_failure_is_reported_but_frame_counts() {
    let mut stage = Stage::new(
        RecordingHost {
            fail_render: true,
            ..Default::default()
        },
        StageParams::default(),
    );
    assert!(matches!(stage.frame(FRAME), Err(StageError::Render(_))));
    assert_eq!(stage.frames(), 1);
}

#[test]
fn held_arrow_key_dollies_camera_and_depth_survives_release() {
    let mut stage = new_stage();
    stage.key_down(DollyKey::Forward);
    for i in 0..10 {
        stage.frame(FRAME * i).unwrap();
    }
    stage.key_up(DollyKey::Forward);
    let dollied = CAMERA_START.z + DOLLY_STEP * 10.0;
    assert!((stage.host().camera.z - dollied).abs() < 1e-4);

    // follower keeps rewriting x/y but leaves the new depth alone
    stage.pointer_moved(0.0, 0.0, 800.0, 600.0);
    for i in 10..60 {
        stage.frame(FRAME * i).unwrap();
    }
    let cam = stage.host().camera;
    assert!((cam.z - dollied).abs() < 1e-4);
    assert!(cam.x < 0.0 && cam.y > 0.0);
}

#[test]
fn dolly_stops_in_front_of_the_scene() {
    let mut stage = new_stage();
    stage.key_down(DollyKey::Forward);
    for i in 0..200 {
        stage.frame(FRAME * i).unwrap();
    }
    assert_eq!(stage.host().camera.z, DOLLY_NEAREST_Z);
}

#[test]
fn opposite_keys_cancel_and_focus_loss_releases() {
    let mut stage = new_stage();
    stage.key_down(DollyKey::Forward);
    stage.key_down(DollyKey::Backward);
    stage.frame(FRAME).unwrap();
    assert_eq!(stage.host().camera.z, CAMERA_START.z);

    stage.key_up(DollyKey::Forward);
    stage.frame(FRAME * 2).unwrap();
    assert!((stage.host().camera.z - (CAMERA_START.z - DOLLY_STEP)).abs() < 1e-6);

    stage.release_keys();
    let z = stage.host().camera.z;
    stage.frame(FRAME * 3).unwrap();
    assert_eq!(stage.host().camera.z, z);
}
