//! Configuration system for webstatus.
//! TOML-based, 3-layer resolution: CLI > env > config file > defaults.

pub mod authority_config;
pub mod dataset_config;
pub mod webstatus_config;

pub use authority_config::AuthorityConfig;
pub use dataset_config::DatasetConfig;
pub use webstatus_config::{CliOverrides, WebstatusConfig};
