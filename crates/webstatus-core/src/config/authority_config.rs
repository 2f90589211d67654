//! Which sources are ground truth for which user agents.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CORE_AGENTS, DEFAULT_OVERRIDE_SOURCES};

/// Authority settings as written in `webstatus.toml`:
///
/// ```toml
/// [authority]
/// override_sources = ["feedback"]
///
/// [authority.core]
/// chromestatus = ["chrome"]
/// webkitstatus = ["webkit", "safari"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AuthorityConfig {
    /// Core agents per source. Empty means the compiled defaults.
    pub core: BTreeMap<String, Vec<String>>,
    /// Sources authoritative for every agent. `None` means the defaults.
    pub override_sources: Option<Vec<String>>,
}

impl AuthorityConfig {
    /// Core agents per source after applying defaults.
    pub fn effective_core(&self) -> BTreeMap<String, Vec<String>> {
        if !self.core.is_empty() {
            return self.core.clone();
        }
        DEFAULT_CORE_AGENTS
            .iter()
            .map(|(source, agents)| {
                (
                    source.to_string(),
                    agents.iter().map(|a| a.to_string()).collect(),
                )
            })
            .collect()
    }

    /// Override sources after applying defaults.
    pub fn effective_override_sources(&self) -> Vec<String> {
        self.override_sources.clone().unwrap_or_else(|| {
            DEFAULT_OVERRIDE_SOURCES
                .iter()
                .map(|s| s.to_string())
                .collect()
        })
    }

    pub fn merge(&mut self, other: &AuthorityConfig) {
        if !other.core.is_empty() {
            self.core = other.core.clone();
        }
        if other.override_sources.is_some() {
            self.override_sources = other.override_sources.clone();
        }
    }
}
