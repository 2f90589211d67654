//! WebKit feature status normalizer.
//!
//! Reports the status of the rendering engine itself (`webkit`), never of
//! Safari directly.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;
use webstatus_core::{Observation, Outcome, SourceId, UserAgent};

use crate::key::WebkitKey;
use crate::normalized::{record_miss, Lookup, NormalizedFeature};
use crate::vocabulary::{self, WEBKITSTATUS};

/// Comment fragment taken to mean the implementation is prefixed.
const PREFIXED_MARKER: &str = " prefixed";

/// `features.json`: named lists (`features`, `specification`) of entries.
/// Top-level keys that are not lists, and entries that do not parse, are
/// skipped.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "BTreeMap<String, Value>")]
pub struct WebkitStatusDataset {
    lists: BTreeMap<String, Vec<WebkitEntry>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebkitEntry {
    pub name: String,
    #[serde(default)]
    pub status: Option<WebkitEntryStatus>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebkitEntryStatus {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub enabled_by_default: Option<bool>,
    #[serde(default)]
    pub comment: Option<String>,
}

impl WebkitStatusDataset {
    pub fn list(&self, name: &str) -> &[WebkitEntry] {
        self.lists.get(name).map(Vec::as_slice).unwrap_or_default()
    }
}

impl From<BTreeMap<String, Value>> for WebkitStatusDataset {
    fn from(raw: BTreeMap<String, Value>) -> Self {
        let lists = raw
            .into_iter()
            .filter_map(|(name, value)| match value {
                Value::Array(entries) => Some((
                    name,
                    entries
                        .into_iter()
                        .filter_map(|entry| serde_json::from_value(entry).ok())
                        .collect(),
                )),
                _ => None,
            })
            .collect();
        Self { lists }
    }
}

pub fn normalize(
    dataset: &WebkitStatusDataset,
    key: &WebkitKey,
    lookup: Lookup,
) -> Outcome<NormalizedFeature> {
    let mut outcome = Outcome::new(NormalizedFeature::default());
    let Some(entry) = dataset
        .list(key.list_name())
        .iter()
        .find(|entry| entry.name.to_lowercase() == key.name)
    else {
        record_miss(&mut outcome, lookup, SourceId::WebkitStatus, key);
        return outcome;
    };

    let Some(details) = &entry.status else {
        return outcome;
    };
    let Some(label) = details.status.as_deref() else {
        tracing::debug!(%key, "webkitstatus entry has no status");
        return outcome;
    };
    let Some(status) = vocabulary::lookup(WEBKITSTATUS, label) else {
        tracing::warn!(label, %key, "unknown webkitstatus status");
        return outcome;
    };

    let comment = details.comment.as_deref();
    let obs = Observation::new(UserAgent::engine(), status, SourceId::WebkitStatus)
        .with_flag(details.enabled_by_default == Some(false))
        .with_prefix(comment.is_some_and(|c| c.contains(PREFIXED_MARKER)))
        .with_notes(comment.map(str::to_string).into_iter().collect())
        .gated();
    outcome.data.observations.push(obs);
    outcome
}
