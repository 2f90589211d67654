//! Reconciled result for one feature.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use webstatus_core::{Observation, StatusLevel, UserAgent};

use crate::polyfill::Polyfill;

/// Every observation gathered for a feature, and the final status sets.
///
/// A user agent appears in at most one of the four sets. Fields are declared
/// in key order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureStatus {
    pub consideration: BTreeSet<UserAgent>,
    pub experimental: BTreeSet<UserAgent>,
    pub implementations: Vec<Observation>,
    pub indevelopment: BTreeSet<UserAgent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polyfills: Option<Vec<Polyfill>>,
    pub shipped: BTreeSet<UserAgent>,
}

impl FeatureStatus {
    /// The set holding agents at `level`. `None` for `Unknown`.
    pub fn agents_at(&self, level: StatusLevel) -> Option<&BTreeSet<UserAgent>> {
        match level {
            StatusLevel::Shipped => Some(&self.shipped),
            StatusLevel::Experimental => Some(&self.experimental),
            StatusLevel::InDevelopment => Some(&self.indevelopment),
            StatusLevel::Consideration => Some(&self.consideration),
            StatusLevel::Unknown => None,
        }
    }

    fn agents_at_mut(&mut self, level: StatusLevel) -> Option<&mut BTreeSet<UserAgent>> {
        match level {
            StatusLevel::Shipped => Some(&mut self.shipped),
            StatusLevel::Experimental => Some(&mut self.experimental),
            StatusLevel::InDevelopment => Some(&mut self.indevelopment),
            StatusLevel::Consideration => Some(&mut self.consideration),
            StatusLevel::Unknown => None,
        }
    }

    /// Place `ua` in the set for `level`. Unknown levels are dropped.
    pub(crate) fn assign(&mut self, ua: UserAgent, level: StatusLevel) {
        if let Some(set) = self.agents_at_mut(level) {
            set.insert(ua);
        }
    }

    /// Final status of `ua`, `Unknown` when it is in no set.
    pub fn status_of(&self, ua: &str) -> StatusLevel {
        StatusLevel::REPORTED
            .into_iter()
            .find(|level| {
                self.agents_at(*level)
                    .is_some_and(|set| set.iter().any(|agent| agent == ua))
            })
            .unwrap_or_default()
    }

    /// True when no agent has a reported status.
    pub fn is_empty(&self) -> bool {
        StatusLevel::REPORTED
            .into_iter()
            .all(|level| self.agents_at(level).is_some_and(BTreeSet::is_empty))
    }
}
