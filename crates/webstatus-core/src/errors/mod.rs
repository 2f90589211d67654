//! Error handling for webstatus.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod dataset_error;
pub mod error_code;
pub mod feature_error;
pub mod issue;
pub mod reconcile_error;
pub mod source_error;

pub use config_error::ConfigError;
pub use dataset_error::DatasetError;
pub use error_code::WebstatusErrorCode;
pub use feature_error::{FeatureError, PolyfillField};
pub use issue::Issue;
pub use reconcile_error::ReconcileError;
pub use source_error::SourceError;
