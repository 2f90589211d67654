//! Edge platform status normalizer.

use serde::Deserialize;
use serde_json::Value;
use webstatus_core::{Observation, Outcome, SourceId};

use crate::json::truthy;
use crate::key::EdgeKey;
use crate::normalized::{record_miss, Lookup, NormalizedFeature};
use crate::vocabulary::{self, EDGESTATUS};

/// `status.json`: a flat list of features.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct EdgeStatusDataset {
    pub features: Vec<EdgeFeature>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EdgeFeature {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "ieStatus", default)]
    pub ie_status: Option<IeStatus>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IeStatus {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(rename = "iePrefixed", default)]
    pub ie_prefixed: Option<Value>,
    #[serde(rename = "ieUnprefixed", default)]
    pub ie_unprefixed: Option<Value>,
    #[serde(default)]
    pub flag: Option<Value>,
}

pub fn normalize(
    dataset: &EdgeStatusDataset,
    key: &EdgeKey,
    lookup: Lookup,
) -> Outcome<NormalizedFeature> {
    let mut outcome = Outcome::new(NormalizedFeature::default());
    let Some(feature) = dataset
        .features
        .iter()
        .find(|f| key.matches(f.id, f.name.as_deref()))
    else {
        record_miss(&mut outcome, lookup, SourceId::EdgeStatus, key);
        return outcome;
    };

    let Some(ie_status) = &feature.ie_status else {
        return outcome;
    };
    let Some(label) = ie_status.text.as_deref() else {
        return outcome;
    };
    let Some(status) = vocabulary::lookup(EDGESTATUS, label) else {
        tracing::warn!(label, %key, "unknown edgestatus status");
        return outcome;
    };

    let obs = Observation::new("edge", status, SourceId::EdgeStatus)
        .with_prefix(truthy(&ie_status.ie_prefixed) && !truthy(&ie_status.ie_unprefixed))
        .with_flag(truthy(&ie_status.flag))
        .gated();
    outcome.data.observations.push(obs);
    outcome
}
