//! Locations of the pre-fetched source datasets.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::source::SourceId;

/// Paths of the local JSON dataset files, one per tracker.
/// A tracker without a path has no dataset; lookups against it are issues.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct DatasetConfig {
    pub caniuse: Option<PathBuf>,
    pub chromestatus: Option<PathBuf>,
    pub edgestatus: Option<PathBuf>,
    pub webkitstatus: Option<PathBuf>,
}

impl DatasetConfig {
    /// Set the path for a dataset-backed source. Other sources are ignored.
    pub fn set_path(&mut self, source: &SourceId, path: PathBuf) {
        match source {
            SourceId::Caniuse => self.caniuse = Some(path),
            SourceId::ChromeStatus => self.chromestatus = Some(path),
            SourceId::EdgeStatus => self.edgestatus = Some(path),
            SourceId::WebkitStatus => self.webkitstatus = Some(path),
            _ => {}
        }
    }

    /// Override every path that `other` sets.
    pub fn merge(&mut self, other: &DatasetConfig) {
        if other.caniuse.is_some() {
            self.caniuse = other.caniuse.clone();
        }
        if other.chromestatus.is_some() {
            self.chromestatus = other.chromestatus.clone();
        }
        if other.edgestatus.is_some() {
            self.edgestatus = other.edgestatus.clone();
        }
        if other.webkitstatus.is_some() {
            self.webkitstatus = other.webkitstatus.clone();
        }
    }
}
