use crate::constants::{ASSET_DIR, ASSET_FILE, ASSET_LOAD_TIMEOUT};
use crate::error::StageError;
use crate::scene::MeshHandle;
use std::time::Duration;

// Splat record layout (32 bytes, little endian)
pub const SPLAT_RECORD_BYTES: usize = 32;
pub const SPLAT_POSITION_OFFSET: usize = 0; // 3 x f32
pub const SPLAT_SCALE_OFFSET: usize = 12; // 3 x f32
pub const SPLAT_COLOR_OFFSET: usize = 24; // 4 x u8 rgba
pub const SPLAT_ROTATION_OFFSET: usize = 28; // 4 x u8 quaternion

/// Number of splat records in a byte buffer of length `len`.
pub fn splat_count(len: usize) -> Result<usize, StageError> {
    if len == 0 || len % SPLAT_RECORD_BYTES != 0 {
        return Err(StageError::AssetFormat {
            len,
            record: SPLAT_RECORD_BYTES,
        });
    }
    Ok(len / SPLAT_RECORD_BYTES)
}

#[derive(Clone, Debug, PartialEq)]
pub struct AssetParams {
    pub dir: String,
    pub file: String,
    pub timeout: Duration,
}

impl Default for AssetParams {
    fn default() -> Self {
        Self {
            dir: ASSET_DIR.to_string(),
            file: ASSET_FILE.to_string(),
            timeout: ASSET_LOAD_TIMEOUT,
        }
    }
}

impl AssetParams {
    pub fn url(&self) -> String {
        if self.dir.is_empty() || self.dir.ends_with('/') {
            format!("{}{}", self.dir, self.file)
        } else {
            format!("{}/{}", self.dir, self.file)
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AssetStatus {
    Pending,
    Ready(MeshHandle),
    Failed(StageError),
}

impl AssetStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, AssetStatus::Pending)
    }

    pub fn mesh(&self) -> Option<MeshHandle> {
        match self {
            AssetStatus::Ready(m) => Some(*m),
            _ => None,
        }
    }
}
