//! Normalized user agent names.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{ENGINE_AGENT, ENGINE_DOWNSTREAM_AGENT, KNOWN_AGENTS};

/// A normalized user agent name such as `chrome` or `safari_ios`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserAgent(String);

impl UserAgent {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The rendering engine agent.
    pub fn engine() -> Self {
        Self::new(ENGINE_AGENT)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the rendering engine agent (`webkit`).
    pub fn is_engine(&self) -> bool {
        self.0 == ENGINE_AGENT
    }

    /// True for the browser whose status is capped by the engine (`safari`).
    pub fn is_engine_downstream(&self) -> bool {
        self.0 == ENGINE_DOWNSTREAM_AGENT
    }

    /// True when the name is one of [`KNOWN_AGENTS`].
    pub fn is_known(&self) -> bool {
        KNOWN_AGENTS.contains(&self.0.as_str())
    }
}

impl fmt::Display for UserAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserAgent {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for UserAgent {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for UserAgent {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
