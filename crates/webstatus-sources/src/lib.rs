//! # webstatus-sources
//!
//! One normalizer per status tracker. Each turns the tracker's raw record
//! for a feature into a flat list of [`Observation`]s, mapping the tracker's
//! own vocabulary onto the status lattice through fixed tables.
//!
//! [`Observation`]: webstatus_core::Observation

pub mod caniuse;
pub mod chromestatus;
pub mod datasets;
pub mod edgestatus;
mod json;
pub mod key;
pub mod normalized;
pub mod other;
pub mod vocabulary;
pub mod webkitstatus;

pub use datasets::Datasets;
pub use key::{EdgeKey, FeatureKey, WebkitKey};
pub use normalized::{Lookup, NormalizedFeature};
pub use other::{CuratedData, CuratedRecord};
