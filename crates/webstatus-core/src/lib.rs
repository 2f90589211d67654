//! # webstatus-core
//!
//! Foundation crate for the webstatus reconciler.
//! Defines the status lattice, user agents, sources, observations,
//! errors, issue collection, config, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod agent;
pub mod config;
pub mod constants;
pub mod errors;
pub mod issues;
pub mod observation;
pub mod source;
pub mod status;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use agent::UserAgent;
pub use config::WebstatusConfig;
pub use errors::Issue;
pub use issues::{IssueLog, Outcome};
pub use observation::Observation;
pub use source::SourceId;
pub use status::StatusLevel;
