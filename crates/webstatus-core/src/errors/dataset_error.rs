//! Dataset loading errors. Fatal: the batch cannot start without its data.

use super::error_code::{self, WebstatusErrorCode};
use crate::source::SourceId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatasetError {
    #[error("Cannot read {tracker} dataset {path}: {message}")]
    Io {
        tracker: SourceId,
        path: String,
        message: String,
    },

    #[error("Cannot decode {tracker} dataset {path}: {message}")]
    Json {
        tracker: SourceId,
        path: String,
        message: String,
    },
}

impl WebstatusErrorCode for DatasetError {
    fn error_code(&self) -> &'static str {
        error_code::DATASET_ERROR
    }
}
