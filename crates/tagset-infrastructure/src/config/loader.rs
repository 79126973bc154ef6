//! Configuration loader
//!
//! Sources are merged in this order (later sources override earlier):
//! 1. Default values from `LintConfig::default()`
//! 2. TOML configuration file (explicit path, or `.tagset.toml` in the
//!    current directory)
//! 3. Environment variables with prefix (e.g., `TAGSET_LOGGING__LEVEL`)

use super::lint::LintConfig;
use crate::error::{Error, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = ".tagset.toml";

/// Environment variable prefix
pub const CONFIG_ENV_PREFIX: &str = "TAGSET";

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Load configuration from all sources
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file is not.
    pub fn load(&self) -> Result<LintConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(LintConfig::default()));

        match &self.config_path {
            Some(path) if path.exists() => {
                figment = figment.merge(Toml::file(path));
                info!("Configuration loaded from {}", path.display());
            }
            Some(path) => {
                return Err(Error::configuration(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            None => match Self::find_default_config_path() {
                Some(path) => {
                    figment = figment.merge(Toml::file(&path));
                    info!("Configuration loaded from {}", path.display());
                }
                None => warn!("No {} found, using defaults", DEFAULT_CONFIG_FILENAME),
            },
        }

        figment = figment.merge(Env::prefixed(&format!("{}_", self.env_prefix)).split("__"));

        let config: LintConfig = figment.extract()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Parse configuration from a TOML string, without file or environment
    pub fn from_toml_str(content: &str) -> Result<LintConfig> {
        let config: LintConfig = Figment::new()
            .merge(Serialized::defaults(LintConfig::default()))
            .merge(Toml::string(content))
            .extract()?;
        validate_config(&config)?;
        Ok(config)
    }

    fn find_default_config_path() -> Option<PathBuf> {
        let path = env::current_dir().ok()?.join(DEFAULT_CONFIG_FILENAME);
        path.exists().then_some(path)
    }
}

fn validate_config(config: &LintConfig) -> Result<()> {
    crate::logging::parse_log_level(&config.logging.level)?;
    if let Some(name) = config.rules.keys().find(|name| name.trim().is_empty()) {
        return Err(Error::configuration(format!(
            "Rule table name cannot be blank: {name:?}"
        )));
    }
    Ok(())
}
