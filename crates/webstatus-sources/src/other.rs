//! Curated data that is already classified.
//!
//! No vocabulary mapping happens here: statuses must use the canonical
//! labels. Records may declare their own source (`feedback` carries reviewer
//! corrections), which defaults to `other`.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;
use webstatus_core::errors::SourceError;
use webstatus_core::{Observation, Outcome, SourceId, StatusLevel};

use crate::json::truthy;
use crate::normalized::NormalizedFeature;

/// Either `{ua: status}` pairs or a list of full records.
#[derive(Debug, Clone, PartialEq)]
pub enum CuratedData {
    ByAgent(BTreeMap<String, String>),
    Records(Vec<CuratedRecord>),
}

/// `prefix` and `flag` accept any JSON value and are read for truthiness.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CuratedRecord {
    pub ua: String,
    pub status: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub prefix: Option<Value>,
    #[serde(default)]
    pub flag: Option<Value>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

impl CuratedData {
    pub fn from_json(value: &Value) -> Result<Self, String> {
        match value {
            Value::Object(map) => map
                .iter()
                .map(|(ua, status)| match status.as_str() {
                    Some(s) => Ok((ua.clone(), s.to_string())),
                    None => Err(format!("status for {ua} must be a string, got {status}")),
                })
                .collect::<Result<_, _>>()
                .map(Self::ByAgent),
            Value::Array(_) => Vec::<CuratedRecord>::deserialize(value)
                .map(Self::Records)
                .map_err(|e| format!("malformed curated record: {e}")),
            other => Err(format!("expected an object or a list, got {other}")),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::ByAgent(map) => map.len(),
            Self::Records(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn normalize(data: &CuratedData) -> Outcome<NormalizedFeature> {
    let mut outcome = Outcome::new(NormalizedFeature::default());
    match data {
        CuratedData::ByAgent(map) => {
            for (ua, label) in map {
                if let Some(status) = parse_status(&mut outcome, &SourceId::Other, ua, label) {
                    outcome
                        .data
                        .observations
                        .push(Observation::new(ua.as_str(), status, SourceId::Other));
                }
            }
        }
        CuratedData::Records(records) => {
            for record in records {
                let source = record
                    .source
                    .as_deref()
                    .map(SourceId::from)
                    .unwrap_or(SourceId::Other);
                let Some(status) = parse_status(&mut outcome, &source, &record.ua, &record.status)
                else {
                    continue;
                };
                let obs = Observation::new(record.ua.as_str(), status, source)
                    .with_prefix(truthy(&record.prefix))
                    .with_flag(truthy(&record.flag))
                    .with_date(record.date.clone())
                    .with_notes(record.comment.iter().cloned().collect());
                outcome.data.observations.push(obs);
            }
        }
    }
    outcome
}

fn parse_status(
    outcome: &mut Outcome<NormalizedFeature>,
    source: &SourceId,
    ua: &str,
    label: &str,
) -> Option<StatusLevel> {
    let status = StatusLevel::from_label(label);
    if status.is_none() {
        outcome.add_issue(SourceError::InvalidStatus {
            tracker: source.clone(),
            ua: ua.to_string(),
            label: label.to_string(),
        });
    }
    status
}
