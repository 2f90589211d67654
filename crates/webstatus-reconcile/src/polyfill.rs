//! Polyfill records attached to a feature.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use webstatus_core::errors::{FeatureError, PolyfillField};
use webstatus_core::Outcome;

/// A polyfill entry. Fields other than `url` and `label` pass through and
/// serialize sorted alongside them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "Map<String, Value>")]
pub struct Polyfill {
    pub url: String,
    pub label: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<Polyfill> for Map<String, Value> {
    fn from(polyfill: Polyfill) -> Self {
        let mut map = polyfill.extra;
        map.insert("label".to_string(), Value::String(polyfill.label));
        map.insert("url".to_string(), Value::String(polyfill.url));
        map
    }
}

/// Keep the records that carry a non-empty `url` and `label`. Each dropped
/// record yields one issue naming `file`.
pub fn validate_polyfills(file: &str, records: &[Map<String, Value>]) -> Outcome<Vec<Polyfill>> {
    let mut outcome = Outcome::new(Vec::with_capacity(records.len()));
    for record in records {
        match check(record) {
            Ok(polyfill) => outcome.data.push(polyfill),
            Err(missing) => outcome.add_issue(FeatureError::PolyfillMalformed {
                file: file.to_string(),
                missing,
            }),
        }
    }
    outcome
}

fn check(record: &Map<String, Value>) -> Result<Polyfill, PolyfillField> {
    let url = non_empty(record, "url").ok_or(PolyfillField::Url)?;
    let label = non_empty(record, "label").ok_or(PolyfillField::Label)?;
    let extra = record
        .iter()
        .filter(|(key, _)| *key != "url" && *key != "label")
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    Ok(Polyfill { url, label, extra })
}

fn non_empty(record: &Map<String, Value>, field: &str) -> Option<String> {
    record
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
