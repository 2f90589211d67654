//! Normalizer output and lookup mode.

use std::fmt::Display;

use webstatus_core::errors::SourceError;
use webstatus_core::{Observation, Outcome, SourceId};

/// Observations produced for one feature by one source lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedFeature {
    pub observations: Vec<Observation>,
    /// Identifier usable for a lookup in another source that shares this
    /// source's ID space (chromestatus ids are also edgestatus ids).
    pub chained_key: Option<u64>,
}

/// Whether a lookup was asked for by the feature record or derived from
/// another source's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// The feature record names this key. Misses are issues.
    Requested,
    /// Best-effort lookup with a key discovered elsewhere. Misses are silent.
    Chained,
}

impl Lookup {
    pub fn reports_misses(&self) -> bool {
        matches!(self, Self::Requested)
    }
}

/// Record a lookup miss unless the lookup is chained.
pub(crate) fn record_miss(
    outcome: &mut Outcome<NormalizedFeature>,
    lookup: Lookup,
    tracker: SourceId,
    key: impl Display,
) {
    if lookup.reports_misses() {
        outcome.add_issue(SourceError::LookupMiss {
            tracker,
            key: key.to_string(),
        });
    } else {
        tracing::debug!(%tracker, %key, "chained lookup missed");
    }
}
