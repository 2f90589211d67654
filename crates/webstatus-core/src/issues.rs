//! Non-fatal issue collection.
//!
//! Every operation that can degrade returns an [`Outcome`]: its data plus the
//! typed issues it ran into. The batch drains those into one [`IssueLog`],
//! which renders them as diagnostic strings and decides the exit code.

use crate::errors::{Issue, WebstatusErrorCode};

/// Result of an operation that accumulates non-fatal issues.
/// Allows partial results to be returned even when some lookups fail.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outcome<T> {
    /// The (possibly partial) result data.
    pub data: T,
    /// Non-fatal issues collected while producing `data`.
    pub issues: Vec<Issue>,
}

impl<T> Outcome<T> {
    /// Create an outcome with no issues.
    pub fn new(data: T) -> Self {
        Self {
            data,
            issues: Vec::new(),
        }
    }

    pub fn with_issue(data: T, issue: impl Into<Issue>) -> Self {
        Self {
            data,
            issues: vec![issue.into()],
        }
    }

    /// Add a non-fatal issue.
    pub fn add_issue(&mut self, issue: impl Into<Issue>) {
        self.issues.push(issue.into());
    }

    /// Move the issues of `other` into `self` and hand back its data.
    pub fn absorb<U>(&mut self, other: Outcome<U>) -> U {
        self.issues.extend(other.issues);
        other.data
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        Outcome {
            data: f(self.data),
            issues: self.issues,
        }
    }

    /// Returns true if there are no issues.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Batch-scoped, ordered list of human-readable issues.
///
/// Created empty for each batch run and inspected once at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueLog {
    entries: Vec<String>,
}

impl IssueLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one issue, rendered as `[CODE] scope: message`.
    pub fn record(&mut self, scope: &str, issue: &Issue) {
        let entry = format!("[{}] {scope}: {issue}", issue.error_code());
        tracing::debug!(code = issue.error_code(), %scope, "{issue}");
        self.entries.push(entry);
    }

    /// Record every issue of an outcome under the same scope.
    pub fn extend<'a>(&mut self, scope: &str, issues: impl IntoIterator<Item = &'a Issue>) {
        for issue in issues {
            self.record(scope, issue);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// `0` when nothing was recorded, `1` otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.entries.is_empty() {
            0
        } else {
            1
        }
    }
}
