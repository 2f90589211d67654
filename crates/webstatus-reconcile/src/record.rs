//! Feature records: `{ "impl": { <source>: <key> }, "polyfills": [...] }`.

use serde_json::{Map, Value};
use webstatus_core::errors::FeatureError;
use webstatus_core::{Outcome, SourceId};
use webstatus_sources::FeatureKey;

/// A feature record after structural validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureRecord {
    /// Valid lookup keys, in source lookup order.
    pub keys: Vec<FeatureKey>,
    /// Raw polyfill records, when the feature lists any.
    pub polyfills: Option<Vec<Map<String, Value>>>,
}

impl FeatureRecord {
    /// Parse and check one feature file.
    ///
    /// Returns `None` when the record has no `impl` section: such features
    /// are not reported. Unparseable files yield an empty record so the
    /// feature still shows up with empty sets. Invalid entries are skipped
    /// with a `ValidationFailure` each.
    pub fn parse(file: &str, text: &str) -> Outcome<Option<FeatureRecord>> {
        let value: Value = match serde_json::from_str(text) {
            Ok(value) => value,
            Err(e) => {
                return Outcome::with_issue(
                    Some(FeatureRecord::default()),
                    FeatureError::ParseFailure {
                        file: file.to_string(),
                        message: e.to_string(),
                    },
                )
            }
        };

        let invalid = |message: String| FeatureError::ValidationFailure {
            file: file.to_string(),
            message,
        };

        let Value::Object(mut root) = value else {
            return Outcome::with_issue(None, invalid("expected a JSON object".to_string()));
        };
        let Some(impl_section) = root.remove("impl") else {
            tracing::debug!(file, "no impl section, skipping");
            return Outcome::new(None);
        };

        let mut outcome = Outcome::new(FeatureRecord::default());
        match impl_section {
            Value::Object(entries) => {
                for (name, raw) in &entries {
                    if raw.is_null() {
                        continue;
                    }
                    let source = SourceId::from(name.as_str());
                    if !source.is_lookup_source() {
                        outcome.add_issue(invalid(format!("unknown source \"{name}\" in impl")));
                        continue;
                    }
                    match FeatureKey::parse(&source, raw) {
                        Ok(key) => outcome.data.keys.push(key),
                        Err(e) => outcome.add_issue(invalid(e.to_string())),
                    }
                }
            }
            other => outcome.add_issue(invalid(format!("impl must be an object, got {other}"))),
        }
        outcome
            .data
            .keys
            .sort_by_key(|key| key.source().lookup_rank());

        match root.remove("polyfills") {
            None | Some(Value::Null) => {}
            Some(Value::Array(items)) => {
                let mut polyfills = Vec::with_capacity(items.len());
                for (index, item) in items.into_iter().enumerate() {
                    match item {
                        Value::Object(record) => polyfills.push(record),
                        other => outcome.add_issue(invalid(format!(
                            "polyfill #{index} must be an object, got {other}"
                        ))),
                    }
                }
                outcome.data.polyfills = Some(polyfills);
            }
            Some(other) => {
                outcome.add_issue(invalid(format!("polyfills must be a list, got {other}")))
            }
        }

        outcome.map(Some)
    }
}
