//! Span definitions per operation: feature, normalize, reconcile.

/// Create the span covering one feature file.
#[macro_export]
macro_rules! feature_span {
    ($feature:expr) => {
        tracing::info_span!("webstatus.feature", feature = %$feature)
    };
}

/// Create the span covering one source lookup.
#[macro_export]
macro_rules! normalize_span {
    ($source:expr, $key:expr) => {
        tracing::debug_span!("webstatus.normalize", source = %$source, key = %$key)
    };
}

/// Create the span covering one reconciliation.
#[macro_export]
macro_rules! reconcile_span {
    ($observations:expr) => {
        tracing::debug_span!("webstatus.reconcile", observations = $observations)
    };
}
