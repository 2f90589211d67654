//! A single `(user agent, status, source)` signal.

use serde::{Deserialize, Serialize};

use crate::agent::UserAgent;
use crate::source::SourceId;
use crate::status::StatusLevel;

/// One implementation signal reported by one source for one user agent.
///
/// Observations are kept in the order sources were consulted and are never
/// deduplicated. Fields are declared in key order so serialized output is
/// sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// The implementation is behind a runtime flag.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub flag: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    /// The implementation requires a vendor prefix.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub prefix: bool,
    pub source: SourceId,
    pub status: StatusLevel,
    pub ua: UserAgent,
}

impl Observation {
    pub fn new(ua: impl Into<UserAgent>, status: StatusLevel, source: SourceId) -> Self {
        Self {
            ua: ua.into(),
            status,
            source,
            prefix: false,
            flag: false,
            notes: Vec::new(),
            date: None,
        }
    }

    pub fn with_prefix(mut self, prefix: bool) -> Self {
        self.prefix = prefix;
        self
    }

    pub fn with_flag(mut self, flag: bool) -> Self {
        self.flag = flag;
        self
    }

    pub fn with_notes(mut self, notes: Vec<String>) -> Self {
        self.notes = notes;
        self
    }

    pub fn with_date(mut self, date: Option<String>) -> Self {
        self.date = date;
        self
    }

    /// A shipped implementation that needs a prefix or a flag is only
    /// experimental.
    pub fn gated(mut self) -> Self {
        if self.status == StatusLevel::Shipped && (self.prefix || self.flag) {
            self.status = StatusLevel::Experimental;
        }
        self
    }
}
