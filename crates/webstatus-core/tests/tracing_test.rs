//! Tests for the webstatus tracing setup.

use std::sync::Mutex;

use webstatus_core::tracing::init_tracing;

/// Serializes tests that touch WEBSTATUS_LOG.
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn init_accepts_per_crate_filter() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("WEBSTATUS_LOG", "webstatus_sources=debug,webstatus_reconcile=warn");
    init_tracing();
    std::env::remove_var("WEBSTATUS_LOG");
}

#[test]
fn init_is_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
}

#[test]
fn spans_can_be_created() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    let span = webstatus_core::feature_span!("webvtt");
    let _enter = span.enter();
    let _inner = webstatus_core::reconcile_span!(3usize);
}
