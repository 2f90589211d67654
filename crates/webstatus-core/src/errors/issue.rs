//! Aggregate of every non-fatal issue kind.

use super::error_code::WebstatusErrorCode;
use super::{FeatureError, ReconcileError, SourceError};

/// A non-fatal issue. Aggregates subsystem errors via `From` conversions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Issue {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Feature(#[from] FeatureError),

    #[error(transparent)]
    Reconcile(#[from] ReconcileError),
}

impl WebstatusErrorCode for Issue {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Source(e) => e.error_code(),
            Self::Feature(e) => e.error_code(),
            Self::Reconcile(e) => e.error_code(),
        }
    }
}
