//! Tests for the reconciliation rules.

use webstatus_core::errors::{Issue, ReconcileError};
use webstatus_core::{Observation, SourceId, StatusLevel};
use webstatus_reconcile::{reconcile, AuthorityTable, FeatureStatus};

use StatusLevel::*;

fn obs(ua: &str, status: StatusLevel, source: &str) -> Observation {
    Observation::new(ua, status, SourceId::from(source))
}

fn run(observations: Vec<Observation>) -> FeatureStatus {
    let outcome = reconcile(observations, &AuthorityTable::default());
    assert!(outcome.is_clean(), "unexpected issues: {:?}", outcome.issues);
    outcome.data
}

fn names(set: &std::collections::BTreeSet<webstatus_core::UserAgent>) -> Vec<&str> {
    set.iter().map(|ua| ua.as_str()).collect()
}

#[test]
fn empty_input_yields_empty_sets() {
    let result = run(Vec::new());
    assert!(result.is_empty());
    assert!(result.implementations.is_empty());
    assert!(result.polyfills.is_none());
}

#[test]
fn core_source_short_circuits() {
    let result = run(vec![
        obs("chrome", Shipped, "chromestatus"),
        obs("chrome", Experimental, "caniuse"),
    ]);
    assert_eq!(names(&result.shipped), vec!["chrome"]);
    assert!(result.experimental.is_empty());
}

#[test]
fn core_source_wins_when_observed_later() {
    let result = run(vec![
        obs("chrome", Shipped, "caniuse"),
        obs("chrome", InDevelopment, "chromestatus"),
    ]);
    assert_eq!(result.status_of("chrome"), InDevelopment);
}

#[test]
fn first_core_observation_wins() {
    let result = run(vec![
        obs("edge", Consideration, "edgestatus"),
        obs("edge", Shipped, "edgestatus"),
    ]);
    assert_eq!(result.status_of("edge"), Consideration);
}

#[test]
fn optimistic_merge_without_authority() {
    let result = run(vec![
        obs("edge", Experimental, "caniuse"),
        obs("edge", Shipped, "chromestatus"),
        obs("edge", Consideration, "other"),
    ]);
    assert_eq!(names(&result.shipped), vec!["edge"]);
}

#[test]
fn feedback_overrides_core_source() {
    let result = run(vec![
        obs("chrome", Shipped, "chromestatus"),
        obs("chrome", Consideration, "feedback"),
        obs("chrome", Shipped, "other"),
    ]);
    assert_eq!(result.status_of("chrome"), Consideration);
}

#[test]
fn feedback_can_clear_a_status() {
    let result = run(vec![
        obs("firefox", Shipped, "caniuse"),
        obs("firefox", Unknown, "feedback"),
    ]);
    assert_eq!(result.status_of("firefox"), Unknown);
    assert!(result.is_empty());
}

#[test]
fn safari_is_capped_by_engine() {
    let result = run(vec![
        obs("safari", Shipped, "caniuse"),
        obs("webkit", InDevelopment, "webkitstatus"),
    ]);
    assert_eq!(names(&result.indevelopment), vec!["safari"]);
    assert!(result.shipped.is_empty());
}

#[test]
fn feedback_on_safari_is_not_capped_by_engine() {
    let result = run(vec![
        obs("webkit", InDevelopment, "webkitstatus"),
        obs("safari", Shipped, "feedback"),
    ]);
    assert_eq!(names(&result.shipped), vec!["safari"]);
    assert_eq!(result.status_of("webkit"), Unknown);
}

#[test]
fn core_safari_status_is_capped_by_engine() {
    let result = run(vec![
        obs("safari", Shipped, "webkitstatus"),
        obs("webkit", Consideration, "webkitstatus"),
    ]);
    assert_eq!(result.status_of("safari"), Consideration);
}

#[test]
fn safari_below_engine_is_untouched() {
    let result = run(vec![
        obs("webkit", Shipped, "webkitstatus"),
        obs("safari", Consideration, "chromestatus"),
    ]);
    assert_eq!(result.status_of("safari"), Consideration);
    assert_eq!(result.status_of("webkit"), Unknown);
}

#[test]
fn engine_reported_without_safari() {
    let result = run(vec![
        obs("webkit", Shipped, "webkitstatus"),
        obs("chrome", Shipped, "chromestatus"),
    ]);
    assert_eq!(names(&result.shipped), vec!["chrome", "webkit"]);
    assert!(!result.shipped.iter().any(|ua| ua == "safari"));
}

#[test]
fn engine_hidden_when_safari_observed() {
    let result = run(vec![
        obs("webkit", Experimental, "webkitstatus"),
        obs("safari", Unknown, "chromestatus"),
    ]);
    assert!(result.is_empty());
}

#[test]
fn unknown_engine_neither_caps_nor_shows() {
    let result = run(vec![
        obs("webkit", Unknown, "other"),
        obs("safari", Shipped, "caniuse"),
    ]);
    assert_eq!(result.status_of("safari"), Shipped);
    assert_eq!(result.status_of("webkit"), Unknown);
}

#[test]
fn implementations_keep_every_observation_in_order() {
    let input = vec![
        obs("chrome", Shipped, "caniuse"),
        obs("webkit", Shipped, "webkitstatus"),
        obs("chrome", Shipped, "caniuse"),
    ];
    let result = run(input.clone());
    assert_eq!(result.implementations, input);
}

#[test]
fn conflicting_engine_observations_keep_the_first() {
    let outcome = reconcile(
        vec![
            obs("webkit", InDevelopment, "webkitstatus"),
            obs("webkit", InDevelopment, "other"),
            obs("webkit", Shipped, "other"),
        ],
        &AuthorityTable::default(),
    );
    assert_eq!(outcome.data.status_of("webkit"), InDevelopment);
    assert_eq!(
        outcome.issues,
        vec![Issue::Reconcile(ReconcileError::EngineConflict {
            agent: "webkit".to_string(),
            kept: InDevelopment,
            kept_from: SourceId::WebkitStatus,
            ignored: Shipped,
            ignored_from: SourceId::Other,
        })]
    );
}
