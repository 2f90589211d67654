//! Tests for polyfill validation.

use serde_json::{json, Map, Value};
use webstatus_core::errors::{FeatureError, Issue, PolyfillField};
use webstatus_reconcile::validate_polyfills;

fn records(value: Value) -> Vec<Map<String, Value>> {
    serde_json::from_value(value).unwrap()
}

#[test]
fn valid_records_pass_through_with_extra_fields() {
    let input = records(json!([
        { "url": "https://github.com/w3c/IntersectionObserver", "label": "W3C polyfill", "size": "7kb" }
    ]));
    let outcome = validate_polyfills("features/io.json", &input);
    assert!(outcome.is_clean());
    let polyfill = &outcome.data[0];
    assert_eq!(polyfill.label, "W3C polyfill");
    assert_eq!(polyfill.extra.get("size"), Some(&json!("7kb")));
    assert_eq!(
        serde_json::to_value(polyfill).unwrap(),
        json!({
            "url": "https://github.com/w3c/IntersectionObserver",
            "label": "W3C polyfill",
            "size": "7kb"
        })
    );
}

#[test]
fn malformed_records_are_dropped() {
    let input = records(json!([
        { "label": "no url" },
        { "url": "https://example.org/p.js", "label": "" },
        { "url": "", "label": "" },
        { "url": "https://example.org/ok.js", "label": "ok" }
    ]));
    let outcome = validate_polyfills("features/x.json", &input);
    assert_eq!(outcome.data.len(), 1);
    assert_eq!(outcome.data[0].label, "ok");

    let missing: Vec<_> = outcome
        .issues
        .iter()
        .map(|issue| match issue {
            Issue::Feature(FeatureError::PolyfillMalformed { missing, .. }) => *missing,
            other => panic!("unexpected issue {other:?}"),
        })
        .collect();
    assert_eq!(
        missing,
        vec![PolyfillField::Url, PolyfillField::Label, PolyfillField::Url]
    );
    assert_eq!(
        outcome.issues[0].to_string(),
        "Missing URL for polyfill in features/x.json"
    );
    assert_eq!(
        outcome.issues[1].to_string(),
        "Missing label for polyfill in features/x.json"
    );
}
