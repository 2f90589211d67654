//! Feature keys: what to look up in each source.
//!
//! The key shape depends on the source (a name, a numeric id, a composite
//! `kind-name` string, or curated data). The shape is checked once when the
//! feature record is parsed, so normalizers never re-inspect raw JSON.

use std::fmt;

use serde_json::Value;
use webstatus_core::errors::SourceError;
use webstatus_core::SourceId;

use crate::other::CuratedData;

/// A lookup key, tagged with the source it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureKey {
    /// caniuse feature name, e.g. `webvtt`.
    Caniuse(String),
    /// chromestatus numeric id.
    ChromeStatus(u64),
    EdgeStatus(EdgeKey),
    WebkitStatus(WebkitKey),
    /// Pre-classified curated data.
    Other(CuratedData),
}

/// edgestatus entries are looked up by numeric id or by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeKey {
    Id(u64),
    Name(String),
}

/// A webkitstatus key such as `feature-css-grid` or `specification-web-audio`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebkitKey {
    /// Leading segment: `feature`, `specification`, ...
    pub kind: String,
    /// Remaining segments joined with spaces, compared to lowercased names.
    pub name: String,
}

impl FeatureKey {
    pub fn source(&self) -> SourceId {
        match self {
            Self::Caniuse(_) => SourceId::Caniuse,
            Self::ChromeStatus(_) => SourceId::ChromeStatus,
            Self::EdgeStatus(_) => SourceId::EdgeStatus,
            Self::WebkitStatus(_) => SourceId::WebkitStatus,
            Self::Other(_) => SourceId::Other,
        }
    }

    /// Resolve the raw `impl.<source>` value of a feature record.
    pub fn parse(source: &SourceId, value: &Value) -> Result<Self, SourceError> {
        let invalid = |reason: String| SourceError::InvalidKey {
            tracker: source.clone(),
            reason,
        };
        match source {
            SourceId::Caniuse => match value.as_str() {
                Some(name) if !name.is_empty() => Ok(Self::Caniuse(name.to_string())),
                _ => Err(invalid(format!("expected a feature name, got {value}"))),
            },
            SourceId::ChromeStatus => value
                .as_u64()
                .map(Self::ChromeStatus)
                .ok_or_else(|| invalid(format!("expected a numeric id, got {value}"))),
            SourceId::EdgeStatus => match value {
                Value::Number(_) => value
                    .as_u64()
                    .map(|id| Self::EdgeStatus(EdgeKey::Id(id)))
                    .ok_or_else(|| invalid(format!("expected a numeric id, got {value}"))),
                Value::String(name) if !name.is_empty() => {
                    Ok(Self::EdgeStatus(EdgeKey::Name(name.clone())))
                }
                _ => Err(invalid(format!("expected an id or a name, got {value}"))),
            },
            SourceId::WebkitStatus => value
                .as_str()
                .and_then(WebkitKey::parse)
                .map(Self::WebkitStatus)
                .ok_or_else(|| invalid(format!("expected a \"kind-name\" string, got {value}"))),
            SourceId::Other => CuratedData::from_json(value).map(Self::Other).map_err(invalid),
            other => Err(invalid(format!("{other} cannot be looked up"))),
        }
    }
}

impl fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Caniuse(name) => f.write_str(name),
            Self::ChromeStatus(id) => write!(f, "{id}"),
            Self::EdgeStatus(key) => key.fmt(f),
            Self::WebkitStatus(key) => key.fmt(f),
            Self::Other(data) => write!(f, "<{} curated entries>", data.len()),
        }
    }
}

impl EdgeKey {
    pub fn matches(&self, id: Option<u64>, name: Option<&str>) -> bool {
        match self {
            Self::Id(wanted) => id == Some(*wanted),
            Self::Name(wanted) => name == Some(wanted.as_str()),
        }
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id} (property id)"),
            Self::Name(name) => write!(f, "{name} (property name)"),
        }
    }
}

impl WebkitKey {
    /// Split `kind-some-name` into `kind` and `some name`.
    /// Returns `None` unless both parts are non-empty.
    pub fn parse(raw: &str) -> Option<Self> {
        let (kind, rest) = raw.split_once('-')?;
        if kind.is_empty() || rest.is_empty() {
            return None;
        }
        Some(Self {
            kind: kind.to_string(),
            name: rest.split('-').collect::<Vec<_>>().join(" "),
        })
    }

    /// Name of the dataset list holding entries of this kind.
    pub fn list_name(&self) -> &str {
        match self.kind.as_str() {
            "feature" => "features",
            kind => kind,
        }
    }
}

impl fmt::Display for WebkitKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.kind, self.name.replace(' ', "-"))
    }
}
