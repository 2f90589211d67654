//! Status trackers that observations come from.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a status source.
///
/// The four trackers have their own normalizers. `Other` is curated data
/// that is already classified. `Feedback` and `Custom` only ever appear as
/// labels declared by curated records.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SourceId {
    Caniuse,
    ChromeStatus,
    EdgeStatus,
    WebkitStatus,
    Feedback,
    Other,
    Custom(String),
}

impl SourceId {
    /// Sources a feature record may reference, in lookup order.
    pub const LOOKUP_ORDER: [SourceId; 5] = [
        SourceId::Caniuse,
        SourceId::ChromeStatus,
        SourceId::EdgeStatus,
        SourceId::WebkitStatus,
        SourceId::Other,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Caniuse => "caniuse",
            Self::ChromeStatus => "chromestatus",
            Self::EdgeStatus => "edgestatus",
            Self::WebkitStatus => "webkitstatus",
            Self::Feedback => "feedback",
            Self::Other => "other",
            Self::Custom(label) => label,
        }
    }

    /// True for sources a feature record may reference under `impl`.
    pub fn is_lookup_source(&self) -> bool {
        Self::LOOKUP_ORDER.contains(self)
    }

    /// Position in [`Self::LOOKUP_ORDER`], if any.
    pub fn lookup_rank(&self) -> Option<usize> {
        Self::LOOKUP_ORDER.iter().position(|s| s == self)
    }
}

impl From<&str> for SourceId {
    fn from(label: &str) -> Self {
        match label {
            "caniuse" => Self::Caniuse,
            "chromestatus" => Self::ChromeStatus,
            "edgestatus" => Self::EdgeStatus,
            "webkitstatus" => Self::WebkitStatus,
            "feedback" => Self::Feedback,
            "other" => Self::Other,
            custom => Self::Custom(custom.to_string()),
        }
    }
}

impl From<String> for SourceId {
    fn from(label: String) -> Self {
        Self::from(label.as_str())
    }
}

impl From<SourceId> for String {
    fn from(source: SourceId) -> Self {
        source.as_str().to_string()
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
