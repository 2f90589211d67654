//! Source normalization errors.

use super::error_code::{self, WebstatusErrorCode};
use crate::source::SourceId;

/// Issues raised while turning a source's raw record into observations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    #[error("Unknown {tracker} feature {key}")]
    LookupMiss { tracker: SourceId, key: String },

    #[error("No {tracker} dataset loaded, cannot look up {key}")]
    DatasetMissing { tracker: SourceId, key: String },

    #[error("Invalid status \"{label}\" for {ua} in {tracker} data")]
    InvalidStatus {
        tracker: SourceId,
        ua: String,
        label: String,
    },

    #[error("Invalid {tracker} key: {reason}")]
    InvalidKey { tracker: SourceId, reason: String },
}

impl WebstatusErrorCode for SourceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::LookupMiss { .. } => error_code::LOOKUP_MISS,
            Self::DatasetMissing { .. } => error_code::DATASET_MISSING,
            Self::InvalidStatus { .. } => error_code::INVALID_STATUS,
            Self::InvalidKey { .. } => error_code::INVALID_KEY,
        }
    }
}
