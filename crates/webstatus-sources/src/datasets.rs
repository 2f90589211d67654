//! The pre-fetched tracker datasets, loaded once per batch and read-only
//! afterwards.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;
use webstatus_core::config::DatasetConfig;
use webstatus_core::errors::{DatasetError, SourceError};
use webstatus_core::{Outcome, SourceId};

use crate::caniuse::{self, CaniuseDataset};
use crate::chromestatus::{self, ChromeStatusDataset};
use crate::edgestatus::{self, EdgeStatusDataset};
use crate::key::FeatureKey;
use crate::normalized::{Lookup, NormalizedFeature};
use crate::other;
use crate::webkitstatus::{self, WebkitStatusDataset};

/// Every dataset the lookups may consult. A tracker without a configured
/// path stays `None`.
#[derive(Debug, Clone, Default)]
pub struct Datasets {
    pub caniuse: Option<CaniuseDataset>,
    pub chromestatus: Option<ChromeStatusDataset>,
    pub edgestatus: Option<EdgeStatusDataset>,
    pub webkitstatus: Option<WebkitStatusDataset>,
}

impl Datasets {
    /// Load every dataset the config names. Any unreadable file is fatal.
    pub fn load(config: &DatasetConfig) -> Result<Self, DatasetError> {
        Ok(Self {
            caniuse: load_one(SourceId::Caniuse, config.caniuse.as_deref())?,
            chromestatus: load_one(SourceId::ChromeStatus, config.chromestatus.as_deref())?,
            edgestatus: load_one(SourceId::EdgeStatus, config.edgestatus.as_deref())?,
            webkitstatus: load_one(SourceId::WebkitStatus, config.webkitstatus.as_deref())?,
        })
    }

    /// Run the normalizer for `key` against its dataset.
    pub fn normalize(&self, key: &FeatureKey, lookup: Lookup) -> Outcome<NormalizedFeature> {
        let source = key.source();
        let _span = webstatus_core::normalize_span!(source, key).entered();

        let outcome = match key {
            FeatureKey::Caniuse(name) => self
                .caniuse
                .as_ref()
                .map(|d| caniuse::normalize(d, name, lookup)),
            FeatureKey::ChromeStatus(id) => self
                .chromestatus
                .as_ref()
                .map(|d| chromestatus::normalize(d, *id, lookup)),
            FeatureKey::EdgeStatus(edge) => self
                .edgestatus
                .as_ref()
                .map(|d| edgestatus::normalize(d, edge, lookup)),
            FeatureKey::WebkitStatus(webkit) => self
                .webkitstatus
                .as_ref()
                .map(|d| webkitstatus::normalize(d, webkit, lookup)),
            FeatureKey::Other(data) => Some(other::normalize(data)),
        };

        outcome.unwrap_or_else(|| {
            let mut missing = Outcome::new(NormalizedFeature::default());
            if lookup.reports_misses() {
                missing.add_issue(SourceError::DatasetMissing {
                    tracker: source,
                    key: key.to_string(),
                });
            }
            missing
        })
    }
}

fn load_one<T: DeserializeOwned>(
    tracker: SourceId,
    path: Option<&Path>,
) -> Result<Option<T>, DatasetError> {
    let Some(path) = path else {
        tracing::debug!(%tracker, "no dataset configured");
        return Ok(None);
    };
    let shown = path.display().to_string();
    let file = File::open(path).map_err(|e| DatasetError::Io {
        tracker: tracker.clone(),
        path: shown.clone(),
        message: e.to_string(),
    })?;
    let dataset = serde_json::from_reader(BufReader::new(file)).map_err(|e| DatasetError::Json {
        tracker: tracker.clone(),
        path: shown.clone(),
        message: e.to_string(),
    })?;
    tracing::info!(%tracker, path = %shown, "loaded dataset");
    Ok(Some(dataset))
}
