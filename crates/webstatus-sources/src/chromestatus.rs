//! chromestatus.com normalizer.
//!
//! Besides Chrome itself, chromestatus relays public signals from the other
//! vendors and whether Opera ships the feature.

use serde::Deserialize;
use serde_json::Value;
use webstatus_core::{Observation, Outcome, SourceId, StatusLevel};

use crate::json::truthy;
use crate::normalized::{record_miss, Lookup, NormalizedFeature};
use crate::vocabulary::{self, CHROMESTATUS};

/// Milestone text meaning the feature is on for every Chrome platform.
const ENABLED_BY_DEFAULT: &str = "Enabled by default";

/// Native label that implies a runtime flag.
const BEHIND_A_FLAG: &str = "Behind a flag";

/// `features.json`: a flat list of features.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ChromeStatusDataset {
    pub features: Vec<ChromeFeature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChromeFeature {
    pub id: u64,
    #[serde(default)]
    pub browsers: Option<ChromeBrowsers>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChromeBrowsers {
    #[serde(default)]
    pub chrome: Option<BrowserEntry>,
    #[serde(default)]
    pub ff: Option<BrowserEntry>,
    #[serde(default)]
    pub edge: Option<BrowserEntry>,
    #[serde(default)]
    pub safari: Option<BrowserEntry>,
    #[serde(default)]
    pub opera: Option<PlatformFlags>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrowserEntry {
    #[serde(default)]
    pub status: Option<StatusText>,
    /// Public signal, used when `status` is absent.
    #[serde(default)]
    pub view: Option<StatusText>,
    #[serde(default)]
    pub prefixed: Option<Value>,
    #[serde(default)]
    pub flag: Option<Value>,
    #[serde(default)]
    pub desktop: Option<Value>,
    #[serde(default)]
    pub android: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusText {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub milestone_str: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlatformFlags {
    #[serde(default)]
    pub desktop: Option<Value>,
    #[serde(default)]
    pub android: Option<Value>,
}

pub fn normalize(
    dataset: &ChromeStatusDataset,
    id: u64,
    lookup: Lookup,
) -> Outcome<NormalizedFeature> {
    let mut outcome = Outcome::new(NormalizedFeature::default());
    let Some(feature) = dataset.features.iter().find(|f| f.id == id) else {
        record_miss(&mut outcome, lookup, SourceId::ChromeStatus, id);
        return outcome;
    };
    outcome.data.chained_key = Some(feature.id);

    let Some(browsers) = &feature.browsers else {
        record_miss(&mut outcome, lookup, SourceId::ChromeStatus, id);
        return outcome;
    };
    let observations = &mut outcome.data.observations;

    if let Some(chrome) = &browsers.chrome {
        if let Some(signal) = parse_entry(chrome) {
            // "in development" and "consideration" are Chromium-level, so
            // they hold on desktop and Android alike.
            let everywhere = matches!(
                signal.status,
                StatusLevel::InDevelopment | StatusLevel::Consideration
            ) || chrome
                .status
                .as_ref()
                .and_then(|s| s.milestone_str.as_deref())
                == Some(ENABLED_BY_DEFAULT);
            if truthy(&chrome.desktop) || everywhere {
                observations.push(signal.observe("chrome"));
            }
            if truthy(&chrome.android) || everywhere {
                observations.push(signal.observe("chrome_android"));
            }
        }
    }

    for (entry, ua) in [
        (&browsers.ff, "firefox"),
        (&browsers.edge, "edge"),
        (&browsers.safari, "safari"),
    ] {
        if let Some(signal) = entry.as_ref().and_then(parse_entry) {
            observations.push(signal.observe(ua));
        }
    }

    if let Some(opera) = &browsers.opera {
        if truthy(&opera.desktop) {
            observations.push(Observation::new(
                "opera",
                StatusLevel::Shipped,
                SourceId::ChromeStatus,
            ));
        }
        if truthy(&opera.android) {
            observations.push(Observation::new(
                "opera_android",
                StatusLevel::Shipped,
                SourceId::ChromeStatus,
            ));
        }
    }
    outcome
}

/// A browser entry reduced to the lattice.
#[derive(Debug, Clone, Copy)]
struct Signal {
    status: StatusLevel,
    prefix: bool,
    flag: bool,
}

impl Signal {
    fn observe(&self, ua: &str) -> Observation {
        Observation::new(ua, self.status, SourceId::ChromeStatus)
            .with_prefix(self.prefix)
            .with_flag(self.flag)
            .gated()
    }
}

fn parse_entry(entry: &BrowserEntry) -> Option<Signal> {
    let label = match (&entry.status, &entry.view) {
        (Some(status), _) => status.text.as_deref(),
        (None, Some(view)) => view.text.as_deref(),
        (None, None) => None,
    }?;
    let Some(status) = vocabulary::lookup(CHROMESTATUS, label) else {
        tracing::warn!(label, "unknown chromestatus status");
        return None;
    };
    Some(Signal {
        status,
        prefix: truthy(&entry.prefixed),
        flag: truthy(&entry.flag) || label == BEHIND_A_FLAG,
    })
}
