//! The status lattice.
//!
//! `Unknown < Consideration < InDevelopment < Experimental < Shipped`, ordered
//! by increasing confidence of deployment. The derived `Ord` is the lattice
//! order, so `max`/`min` are the optimistic merge and the engine cap.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Implementation status of a feature in one user agent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum StatusLevel {
    /// No signal, or an explicit negative signal. Never reported as a set.
    #[default]
    #[serde(rename = "")]
    Unknown,
    #[serde(rename = "consideration")]
    Consideration,
    #[serde(rename = "indevelopment")]
    InDevelopment,
    #[serde(rename = "experimental")]
    Experimental,
    #[serde(rename = "shipped")]
    Shipped,
}

impl StatusLevel {
    /// The four levels that appear as sets in a feature result,
    /// most confident first.
    pub const REPORTED: [StatusLevel; 4] = [
        StatusLevel::Shipped,
        StatusLevel::Experimental,
        StatusLevel::InDevelopment,
        StatusLevel::Consideration,
    ];

    /// Canonical label, as used for output keys and curated data.
    /// `Unknown` is the empty string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "",
            Self::Consideration => "consideration",
            Self::InDevelopment => "indevelopment",
            Self::Experimental => "experimental",
            Self::Shipped => "shipped",
        }
    }

    /// Parse a canonical label. Returns `None` for anything else.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "" => Some(Self::Unknown),
            "consideration" => Some(Self::Consideration),
            "indevelopment" => Some(Self::InDevelopment),
            "experimental" => Some(Self::Experimental),
            "shipped" => Some(Self::Shipped),
            _ => None,
        }
    }

    pub fn is_known(&self) -> bool {
        *self != Self::Unknown
    }

    /// Constrain this level to at most `ceiling`.
    pub fn capped_at(self, ceiling: StatusLevel) -> StatusLevel {
        self.min(ceiling)
    }
}

impl fmt::Display for StatusLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => f.write_str("unknown"),
            other => f.write_str(other.as_str()),
        }
    }
}
