//! Reconciliation data-quality errors.

use super::error_code::{self, WebstatusErrorCode};
use crate::source::SourceId;
use crate::status::StatusLevel;

/// Data-quality problems noticed while reconciling. Reconciliation itself
/// never fails; these ride along with its result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReconcileError {
    #[error(
        "Conflicting {agent} statuses: kept {kept} from {kept_from}, ignored {ignored} from {ignored_from}"
    )]
    EngineConflict {
        agent: String,
        kept: StatusLevel,
        kept_from: SourceId,
        ignored: StatusLevel,
        ignored_from: SourceId,
    },
}

impl WebstatusErrorCode for ReconcileError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EngineConflict { .. } => error_code::ENGINE_CONFLICT,
        }
    }
}
