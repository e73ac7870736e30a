//! Plain data exchanged with the media collaborators.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A rendered per-slide clip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct RenderedClip {
    /// Where the clip was written
    path: PathBuf,
    /// Clip length in seconds
    duration_secs: f64,
}

impl RenderedClip {
    /// Describe a clip on disk.
    pub fn new(path: impl Into<PathBuf>, duration_secs: f64) -> Self {
        Self {
            path: path.into(),
            duration_secs,
        }
    }
}
