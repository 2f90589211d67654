//! Top-level webstatus configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AuthorityConfig, DatasetConfig};
use crate::agent::UserAgent;
use crate::constants::CONFIG_FILE_NAME;
use crate::errors::ConfigError;
use crate::source::SourceId;

/// Environment variables naming dataset files, per source.
const DATASET_ENV_VARS: [(&str, SourceId); 4] = [
    ("WEBSTATUS_CANIUSE", SourceId::Caniuse),
    ("WEBSTATUS_CHROMESTATUS", SourceId::ChromeStatus),
    ("WEBSTATUS_EDGESTATUS", SourceId::EdgeStatus),
    ("WEBSTATUS_WEBKITSTATUS", SourceId::WebkitStatus),
];

/// Top-level configuration.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`WEBSTATUS_*`)
/// 3. Config file (`--config`, else `webstatus.toml` in the working directory)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct WebstatusConfig {
    pub datasets: DatasetConfig,
    pub authority: AuthorityConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub caniuse: Option<PathBuf>,
    pub chromestatus: Option<PathBuf>,
    pub edgestatus: Option<PathBuf>,
    pub webkitstatus: Option<PathBuf>,
}

impl WebstatusConfig {
    /// Load configuration with layered resolution.
    ///
    /// An explicit `config_file` must exist. Without one, `webstatus.toml`
    /// in `root` is used when present.
    pub fn load(
        root: &Path,
        config_file: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: config file
        match config_file {
            Some(path) => Self::merge_toml_file(&mut config, path)?,
            None => {
                let project_config_path = root.join(CONFIG_FILE_NAME);
                if project_config_path.exists() {
                    Self::merge_toml_file(&mut config, &project_config_path)?;
                }
            }
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &WebstatusConfig) -> Result<(), ConfigError> {
        for (source, agents) in &config.authority.core {
            let field = format!("authority.core.{source}");
            if matches!(SourceId::from(source.as_str()), SourceId::Custom(_)) {
                return Err(ConfigError::ValidationFailed {
                    field,
                    message: format!("unknown source \"{source}\""),
                });
            }
            if agents.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field,
                    message: "must name at least one user agent".to_string(),
                });
            }
            if let Some(agent) = agents.iter().find(|a| !UserAgent::new(a.as_str()).is_known()) {
                return Err(ConfigError::ValidationFailed {
                    field,
                    message: format!("unknown user agent \"{agent}\""),
                });
            }
        }
        if let Some(ref sources) = config.authority.override_sources {
            if let Some(source) = sources
                .iter()
                .find(|s| matches!(SourceId::from(s.as_str()), SourceId::Custom(_)))
            {
                return Err(ConfigError::ValidationFailed {
                    field: "authority.override_sources".to_string(),
                    message: format!("unknown source \"{source}\""),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut WebstatusConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: WebstatusConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        config.datasets.merge(&file_config.datasets);
        config.authority.merge(&file_config.authority);
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `WEBSTATUS_CANIUSE=/path/to/caniuse.json`, etc.
    fn apply_env_overrides(config: &mut WebstatusConfig) {
        for (var, source) in &DATASET_ENV_VARS {
            if let Ok(val) = std::env::var(var) {
                if !val.is_empty() {
                    config.datasets.set_path(source, PathBuf::from(val));
                }
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut WebstatusConfig, cli: &CliOverrides) {
        config.datasets.merge(&DatasetConfig {
            caniuse: cli.caniuse.clone(),
            chromestatus: cli.chromestatus.clone(),
            edgestatus: cli.edgestatus.clone(),
            webkitstatus: cli.webkitstatus.clone(),
        });
    }
}
