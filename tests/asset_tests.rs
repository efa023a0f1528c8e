// Host-side tests for splat buffer validation and asset parameters.

use stage_core::{splat_count, AssetParams, AssetStatus, MeshHandle, StageError, SPLAT_RECORD_BYTES};

#[test]
fn whole_records_are_counted() {
    assert_eq!(splat_count(SPLAT_RECORD_BYTES), Ok(1));
    assert_eq!(splat_count(SPLAT_RECORD_BYTES * 1000), Ok(1000));
}

#[test]
fn partial_or_empty_buffers_are_rejected() {
    assert_eq!(
        splat_count(0),
        Err(StageError::AssetFormat {
            len: 0,
            record: SPLAT_RECORD_BYTES
        })
    );
    assert!(matches!(
        splat_count(SPLAT_RECORD_BYTES * 3 + 5),
        Err(StageError::AssetFormat { len, .. }) if len == SPLAT_RECORD_BYTES * 3 + 5
    ));
}

#[test]
fn asset_url_joins_dir_and_file() {
    assert_eq!(AssetParams::default().url(), "./ile.splat");
    let p = AssetParams {
        dir: "assets".into(),
        file: "scan.splat".into(),
        ..Default::default()
    };
    assert_eq!(p.url(), "assets/scan.splat");
    let p = AssetParams {
        dir: String::new(),
        ..Default::default()
    };
    assert_eq!(p.url(), "ile.splat");
}

#[test]
fn status_helpers() {
    assert!(AssetStatus::Pending.is_pending());
    assert_eq!(AssetStatus::Pending.mesh(), None);
    assert_eq!(AssetStatus::Ready(MeshHandle(2)).mesh(), Some(MeshHandle(2)));
    let failed = AssetStatus::Failed(StageError::AssetLoad("x".into()));
    assert!(!failed.is_pending());
    assert_eq!(failed.mesh(), None);
}

#[test]
fn errors_render_readable_messages() {
    let e = StageError::AssetFormat { len: 33, record: 32 };
    assert_eq!(
        e.to_string(),
        "splat data of 33 bytes is not a whole number of 32-byte records"
    );
    assert_eq!(
        StageError::UnknownMesh(MeshHandle(4)).to_string(),
        "no mesh installed for MeshHandle(4)"
    );
}
