//! # Admin Configuration
//!
//! Layered configuration for the admin layer, built with the `config` crate:
//!
//! 1. Built-in defaults
//! 2. An optional TOML/YAML/JSON file
//! 3. Environment variables prefixed with `FEDERATION_ADMIN_`
//!    (nested keys separated by `__`)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use federation_admin::config::AdminConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AdminConfig::load_from("config/admin.toml")?;
//! println!("mode = {}", config.deployment_mode);
//! # Ok(())
//! # }
//! ```

pub mod error;

use crate::constants::{DeploymentMode, DEFAULT_REGISTRY_TIMEOUT_MS};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

pub use error::{ConfigResult, ConfigurationError};

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "FEDERATION_ADMIN";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Which administrable classes this engine exposes
    #[serde(default)]
    pub deployment_mode: DeploymentMode,

    /// Budget for a single registry enumeration
    #[serde(default = "default_registry_timeout_ms")]
    pub registry_timeout_ms: u64,

    /// Deployment environment name, used for log level selection
    #[serde(default = "default_environment")]
    pub environment: String,
}

fn default_registry_timeout_ms() -> u64 {
    DEFAULT_REGISTRY_TIMEOUT_MS
}

fn default_environment() -> String {
    "development".to_string()
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            deployment_mode: DeploymentMode::default(),
            registry_timeout_ms: default_registry_timeout_ms(),
            environment: default_environment(),
        }
    }
}

impl AdminConfig {
    /// Defaults overlaid with `FEDERATION_ADMIN_*` environment variables.
    pub fn load() -> ConfigResult<Self> {
        Self::load_layered(None, ENV_PREFIX)
    }

    /// Defaults, then `path` (if it exists), then environment variables.
    pub fn load_from(path: impl AsRef<Path>) -> ConfigResult<Self> {
        Self::load_layered(Some(path.as_ref()), ENV_PREFIX)
    }

    /// Full layering with an explicit environment prefix.
    pub fn load_layered(path: Option<&Path>, env_prefix: &str) -> ConfigResult<Self> {
        let mut builder = config::Config::builder()
            .set_default("deployment_mode", DeploymentMode::default().as_str())?
            .set_default("registry_timeout_ms", DEFAULT_REGISTRY_TIMEOUT_MS)?
            .set_default("environment", default_environment())?;

        if let Some(path) = path {
            debug!(path = %path.display(), "Adding configuration file source");
            builder = builder.add_source(config::File::from(path).required(false));
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix(env_prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: AdminConfig = settings.try_deserialize()?;
        config.validate()?;

        debug!(
            deployment_mode = %config.deployment_mode,
            registry_timeout_ms = config.registry_timeout_ms,
            environment = %config.environment,
            "Admin configuration loaded"
        );
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.registry_timeout_ms == 0 {
            return Err(ConfigurationError::invalid_value(
                "registry_timeout_ms",
                "0",
                "registry fetches need a non-zero timeout",
            ));
        }
        if self.environment.trim().is_empty() {
            return Err(ConfigurationError::invalid_value(
                "environment",
                self.environment.clone(),
                "environment name cannot be blank",
            ));
        }
        Ok(())
    }

    pub fn registry_timeout(&self) -> Duration {
        Duration::from_millis(self.registry_timeout_ms)
    }

    #[must_use]
    pub fn with_deployment_mode(mut self, mode: DeploymentMode) -> Self {
        self.deployment_mode = mode;
        self
    }

    #[must_use]
    pub fn with_registry_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.registry_timeout_ms = timeout_ms;
        self
    }
}
