//! Service configuration file
//!
//! Optional JSON file; every field has a default, and command-line or
//! environment overrides are applied on top.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::http_server::HttpServerConfig;
use crate::observability::LogFormat;
use crate::store::StoreConfig;

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: HttpServerConfig,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load from `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> CliResult<()> {
        self.store.validate().map_err(CliError::config_error)?;

        if self.server.host.trim().is_empty() {
            return Err(CliError::config_error("server.host must not be empty"));
        }

        Ok(())
    }

    /// Apply command-line / environment overrides, then re-validate
    pub fn with_overrides(
        mut self,
        port: Option<u16>,
        database_url: Option<String>,
        log_format: Option<LogFormat>,
    ) -> CliResult<Self> {
        if let Some(port) = port {
            self.server.port = port;
        }
        if let Some(url) = database_url {
            self.store.database_url = url;
        }
        if let Some(format) = log_format {
            self.log_format = format;
        }
        self.validate()?;
        Ok(self)
    }
}
