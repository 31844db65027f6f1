//! Configuration management for the philotype engine.

pub mod constants;
mod sub_configs;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

pub use sub_configs::{EngineConfig, LoggingConfig};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub engine: EngineConfig,
}

impl Config {
    /// Load configuration from files and environment.
    ///
    /// Configuration is loaded in order:
    /// 1. config/default.toml (base settings)
    /// 2. config/{PHILOTYPE_ENV}.toml (environment-specific)
    /// 3. Environment variables with PHILOTYPE prefix
    pub fn load() -> CoreResult<Self> {
        let env = std::env::var("PHILOTYPE_ENV").unwrap_or_else(|_| "development".to_string());

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            .add_source(config::Environment::with_prefix("PHILOTYPE").separator("__"));

        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &std::path::Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CoreError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| CoreError::ConfigError(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> CoreResult<()> {
        if self.engine.radii.is_empty() {
            return Err(CoreError::ConfigError(
                "engine.radii must contain at least one radius".into(),
            ));
        }

        for &radius in &self.engine.radii {
            if !(radius >= 0.0) {
                return Err(CoreError::ConfigError(format!(
                    "engine.radii entries must be non-negative, got {}",
                    radius
                )));
            }
        }

        if !(self.engine.default_radius >= 0.0) {
            return Err(CoreError::ConfigError(format!(
                "engine.default_radius must be non-negative, got {}",
                self.engine.default_radius
            )));
        }

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(CoreError::ConfigError(format!(
                    "logging.level must be one of trace/debug/info/warn/error, got '{}'",
                    other
                )));
            }
        }

        Ok(())
    }
}
