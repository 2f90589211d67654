//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize the webstatus tracing/logging system.
///
/// Reads the `WEBSTATUS_LOG` environment variable for per-crate log levels.
/// Format: `WEBSTATUS_LOG=webstatus_sources=debug,webstatus_reconcile=warn`
///
/// Falls back to `webstatus=info` if `WEBSTATUS_LOG` is not set or is invalid.
/// Logs go to stderr; stdout carries the JSON report.
///
/// Calling this more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
