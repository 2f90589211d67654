//! WebstatusErrorCode trait for diagnostic rendering.

/// Every error enum implements this to provide a stable code string
/// for the diagnostic stream.
pub trait WebstatusErrorCode {
    /// Returns the code string (e.g., "LOOKUP_MISS").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted diagnostic string: `[ERROR_CODE] message`.
    fn diagnostic(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const LOOKUP_MISS: &str = "LOOKUP_MISS";
pub const DATASET_MISSING: &str = "DATASET_MISSING";
pub const INVALID_STATUS: &str = "INVALID_STATUS";
pub const INVALID_KEY: &str = "INVALID_KEY";
pub const PARSE_FAILURE: &str = "PARSE_FAILURE";
pub const VALIDATION_FAILURE: &str = "VALIDATION_FAILURE";
pub const POLYFILL_MALFORMED: &str = "POLYFILL_MALFORMED";
pub const ENGINE_CONFLICT: &str = "ENGINE_CONFLICT";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const DATASET_ERROR: &str = "DATASET_ERROR";
