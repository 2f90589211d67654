//! caniuse.com normalizer.
//!
//! caniuse reports a support string per agent version. The latest released
//! version decides; when it has nothing, the pre-release versions are
//! checked for experimental support.

use std::collections::BTreeMap;

use serde::Deserialize;
use webstatus_core::{Observation, Outcome, SourceId, StatusLevel};

use crate::normalized::{record_miss, Lookup, NormalizedFeature};
use crate::vocabulary;

/// Number of trailing entries in an agent's version list that are
/// pre-releases.
const PREVIEW_VERSIONS: usize = 3;

/// The subset of `data.json` the normalizer reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CaniuseDataset {
    #[serde(default)]
    pub agents: BTreeMap<String, CaniuseAgent>,
    #[serde(default)]
    pub data: BTreeMap<String, CaniuseFeature>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CaniuseAgent {
    /// Oldest first; padded with nulls.
    #[serde(default)]
    pub versions: Vec<Option<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CaniuseFeature {
    /// Agent id → version → support string such as `"y"`, `"a x #2"`, `"n d"`.
    #[serde(default)]
    pub stats: BTreeMap<String, BTreeMap<String, String>>,
    #[serde(default)]
    pub notes_by_num: BTreeMap<String, String>,
}

pub fn normalize(
    dataset: &CaniuseDataset,
    name: &str,
    lookup: Lookup,
) -> Outcome<NormalizedFeature> {
    let mut outcome = Outcome::new(NormalizedFeature::default());
    let Some(feature) = dataset.data.get(name) else {
        record_miss(&mut outcome, lookup, SourceId::Caniuse, name);
        return outcome;
    };

    for (agent, support) in &feature.stats {
        let Some(ua) = vocabulary::caniuse_agent(agent) else {
            continue;
        };
        let versions = dataset
            .agents
            .get(agent)
            .map(|a| a.versions.as_slice())
            .unwrap_or_default();
        let (latest, previews) = split_versions(versions);

        let released = latest
            .and_then(|version| support.get(version))
            .map(|s| parse_support(ua, s, false, &feature.notes_by_num));
        match released {
            Some(obs) if obs.status >= StatusLevel::Experimental => {
                outcome.data.observations.push(obs);
            }
            _ => {
                for version in previews.iter().flatten() {
                    let Some(s) = support.get(version) else {
                        continue;
                    };
                    let obs = parse_support(ua, s, true, &feature.notes_by_num);
                    if obs.status == StatusLevel::Experimental {
                        outcome.data.observations.push(obs);
                    }
                }
            }
        }
    }
    outcome
}

/// Latest released version and the trailing pre-release versions.
fn split_versions(versions: &[Option<String>]) -> (Option<&str>, &[Option<String>]) {
    let latest = versions
        .len()
        .checked_sub(PREVIEW_VERSIONS + 1)
        .and_then(|i| versions[i].as_deref());
    let previews = &versions[versions.len().saturating_sub(PREVIEW_VERSIONS)..];
    (latest, previews)
}

fn parse_support(
    ua: &str,
    support: &str,
    preview: bool,
    notes_by_num: &BTreeMap<String, String>,
) -> Observation {
    let status = if support.starts_with('y') || support.starts_with('a') {
        if preview {
            StatusLevel::Experimental
        } else {
            StatusLevel::Shipped
        }
    } else if support.starts_with("n d") {
        StatusLevel::Experimental
    } else {
        StatusLevel::Unknown
    };
    let notes = support
        .split_whitespace()
        .filter_map(|token| token.strip_prefix('#'))
        .filter_map(|num| notes_by_num.get(num).cloned())
        .collect();

    Observation::new(ua, status, SourceId::Caniuse)
        .with_prefix(support.contains('x'))
        .with_flag(support.contains('d'))
        .with_notes(notes)
        .gated()
}
