//! # webstatus-reconcile
//!
//! Folds the observations gathered for a feature into one status per user
//! agent, and runs that fold over a batch of feature files.

pub mod authority;
pub mod batch;
pub mod feature_status;
pub mod polyfill;
pub mod reconciler;
pub mod record;

pub use authority::{Authority, AuthorityTable};
pub use batch::{Batch, BatchReport};
pub use feature_status::FeatureStatus;
pub use polyfill::{validate_polyfills, Polyfill};
pub use reconciler::reconcile;
pub use record::FeatureRecord;
