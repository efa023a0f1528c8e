use crate::scene::MeshHandle;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StageError {
    #[error("asset load failed: {0}")]
    AssetLoad(String),
    #[error("splat data of {len} bytes is not a whole number of {record}-byte records")]
    AssetFormat { len: usize, record: usize },
    #[error("asset {path} did not load within {waited:?}")]
    AssetTimeout { path: String, waited: Duration },
    #[error("render failed: {0}")]
    Render(String),
    #[error("no mesh installed for {0:?}")]
    UnknownMesh(MeshHandle),
}
