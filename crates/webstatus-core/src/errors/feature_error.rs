//! Feature record errors.

use std::fmt;

use super::error_code::{self, WebstatusErrorCode};

/// Issues raised while reading and checking one feature file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeatureError {
    #[error("Could not parse {file} as JSON: {message}")]
    ParseFailure { file: String, message: String },

    #[error("{file} does not validate: {message}")]
    ValidationFailure { file: String, message: String },

    #[error("Missing {missing} for polyfill in {file}")]
    PolyfillMalformed { file: String, missing: PolyfillField },
}

/// The polyfill field that was missing or empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolyfillField {
    Url,
    Label,
}

impl fmt::Display for PolyfillField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url => f.write_str("URL"),
            Self::Label => f.write_str("label"),
        }
    }
}

impl WebstatusErrorCode for FeatureError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ParseFailure { .. } => error_code::PARSE_FAILURE,
            Self::ValidationFailure { .. } => error_code::VALIDATION_FAILURE,
            Self::PolyfillMalformed { .. } => error_code::POLYFILL_MALFORMED,
        }
    }
}
