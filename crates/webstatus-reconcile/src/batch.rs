//! Per-feature pipeline: parse, look up, reconcile, validate polyfills.

use std::collections::BTreeMap;

use serde::Serialize;
use webstatus_core::errors::{FeatureError, Issue};
use webstatus_core::{IssueLog, Observation, Outcome, SourceId};
use webstatus_sources::{Datasets, EdgeKey, FeatureKey, Lookup};

use crate::authority::AuthorityTable;
use crate::feature_status::FeatureStatus;
use crate::polyfill::validate_polyfills;
use crate::reconciler::reconcile;
use crate::record::FeatureRecord;

/// One batch run over a set of feature files.
///
/// Datasets and authority are shared read-only. The issue log is the only
/// state carried from one feature to the next.
pub struct Batch<'a> {
    datasets: &'a Datasets,
    authority: &'a AuthorityTable,
    features: BTreeMap<String, FeatureStatus>,
    issues: IssueLog,
}

/// Result of a batch: the features keyed by id, and every issue recorded.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    #[serde(flatten)]
    pub features: BTreeMap<String, FeatureStatus>,
    #[serde(skip)]
    pub issues: IssueLog,
}

impl BatchReport {
    pub fn exit_code(&self) -> u8 {
        self.issues.exit_code()
    }
}

impl<'a> Batch<'a> {
    pub fn new(datasets: &'a Datasets, authority: &'a AuthorityTable) -> Self {
        Self {
            datasets,
            authority,
            features: BTreeMap::new(),
            issues: IssueLog::new(),
        }
    }

    /// Process the contents of one feature file. Returns the feature's
    /// result, or `None` when the record is not to be reported.
    pub fn run_feature(&mut self, id: &str, file: &str, text: &str) -> Option<&FeatureStatus> {
        let _span = webstatus_core::feature_span!(id).entered();

        let parsed = FeatureRecord::parse(file, text);
        self.issues.extend(id, &parsed.issues);
        let record = parsed.data?;

        let gathered = self.gather(&record);
        self.issues.extend(id, &gathered.issues);

        let reconciled = reconcile(gathered.data, self.authority);
        self.issues.extend(id, &reconciled.issues);
        let mut status = reconciled.data;

        if let Some(raw) = &record.polyfills {
            let polyfills = validate_polyfills(file, raw);
            self.issues.extend(id, &polyfills.issues);
            status.polyfills = Some(polyfills.data);
        }

        tracing::info!(
            observations = status.implementations.len(),
            shipped = status.shipped.len(),
            "feature reconciled"
        );
        self.features.insert(id.to_string(), status);
        self.features.get(id)
    }

    /// Record a feature file that could not be read. The feature is reported
    /// with empty sets.
    pub fn record_unreadable(&mut self, id: &str, file: &str, message: &str) {
        let issue = FeatureError::ParseFailure {
            file: file.to_string(),
            message: message.to_string(),
        };
        self.issues.record(id, &Issue::from(issue));
        self.features.insert(id.to_string(), FeatureStatus::default());
    }

    pub fn issues(&self) -> &IssueLog {
        &self.issues
    }

    pub fn finish(self) -> BatchReport {
        tracing::info!(
            features = self.features.len(),
            issues = self.issues.len(),
            "batch finished"
        );
        BatchReport {
            features: self.features,
            issues: self.issues,
        }
    }

    /// Run every lookup the record asks for, source by source. A found
    /// chromestatus entry also triggers a best-effort edgestatus lookup by
    /// the same id, right after the requested edgestatus lookups.
    fn gather(&self, record: &FeatureRecord) -> Outcome<Vec<Observation>> {
        let mut outcome = Outcome::new(Vec::new());
        let mut chained = None;

        for source in &SourceId::LOOKUP_ORDER {
            for key in record.keys.iter().filter(|key| key.source() == *source) {
                let normalized = outcome.absorb(self.datasets.normalize(key, Lookup::Requested));
                chained = chained.or(normalized.chained_key);
                outcome.data.extend(normalized.observations);
            }
            if *source == SourceId::EdgeStatus {
                if let Some(id) = chained {
                    let key = FeatureKey::EdgeStatus(EdgeKey::Id(id));
                    let normalized = outcome.absorb(self.datasets.normalize(&key, Lookup::Chained));
                    outcome.data.extend(normalized.observations);
                }
            }
        }
        outcome
    }
}
