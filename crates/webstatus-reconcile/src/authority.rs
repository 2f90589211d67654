//! Which sources are ground truth for which user agents.

use std::collections::{BTreeMap, BTreeSet};

use webstatus_core::config::AuthorityConfig;
use webstatus_core::{SourceId, UserAgent};

/// How much weight a source carries for one user agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Authority {
    /// Subject to the optimistic merge.
    None,
    /// The source is the platform tracker for this agent.
    Core,
    /// Reviewer corrections: authoritative for every agent.
    Override,
}

/// Source → core agents, plus the override sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorityTable {
    core: BTreeMap<SourceId, BTreeSet<UserAgent>>,
    overrides: BTreeSet<SourceId>,
}

impl AuthorityTable {
    /// Build the table from (already validated) configuration.
    pub fn from_config(config: &AuthorityConfig) -> Self {
        let core = config
            .effective_core()
            .into_iter()
            .map(|(source, agents)| {
                (
                    SourceId::from(source),
                    agents.into_iter().map(UserAgent::new).collect(),
                )
            })
            .collect();
        let overrides = config
            .effective_override_sources()
            .into_iter()
            .map(SourceId::from)
            .collect();
        Self { core, overrides }
    }

    pub fn authority(&self, source: &SourceId, ua: &UserAgent) -> Authority {
        if self.overrides.contains(source) {
            Authority::Override
        } else if self.core.get(source).is_some_and(|agents| agents.contains(ua)) {
            Authority::Core
        } else {
            Authority::None
        }
    }
}

impl Default for AuthorityTable {
    fn default() -> Self {
        Self::from_config(&AuthorityConfig::default())
    }
}
