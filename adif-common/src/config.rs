//! Configuration loading and resolution
//!
//! Each setting is resolved in priority order:
//! 1. Command-line argument / environment variable (highest priority)
//! 2. TOML config file
//! 3. Compiled default (fallback)

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
/// 10 MiB upload limit
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
pub const DEFAULT_LOG_LEVEL: &str = "adif_award=info,tower_http=info";

/// Directory name under the platform config dir
const APP_DIR: &str = "adif-award";

/// On-disk TOML configuration. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub max_upload_bytes: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingSection {
    /// tracing-subscriber filter directive, e.g. "adif_award=debug"
    pub level: Option<String>,
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub max_upload_bytes: Option<usize>,
    pub log_level: Option<String>,
}

/// Fully resolved service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub max_upload_bytes: usize,
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ServiceConfig {
    /// Merge overrides, file values and compiled defaults
    pub fn resolve(overrides: ConfigOverrides, file: Option<TomlConfig>) -> Result<Self> {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        let config = Self {
            host: overrides
                .host
                .or(file.server.host)
                .unwrap_or(defaults.host),
            port: overrides.port.or(file.server.port).unwrap_or(defaults.port),
            max_upload_bytes: overrides
                .max_upload_bytes
                .or(file.server.max_upload_bytes)
                .unwrap_or(defaults.max_upload_bytes),
            log_level: overrides
                .log_level
                .or(file.logging.level)
                .unwrap_or(defaults.log_level),
        };

        if config.max_upload_bytes == 0 {
            return Err(Error::Config(
                "max_upload_bytes must be greater than zero".to_string(),
            ));
        }
        if config.host.trim().is_empty() {
            return Err(Error::Config("host must not be empty".to_string()));
        }

        Ok(config)
    }

    /// Socket address string for binding the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parse a TOML config file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

/// Platform default config file path (e.g. ~/.config/adif-award/config.toml)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
}

/// Locate and load the config file.
///
/// An explicit path must exist (`Error::Io` otherwise) and parse. The
/// platform default is optional: when it is absent the result is `Ok(None)`
/// and compiled defaults apply.
pub fn load_config_file(explicit: Option<&Path>) -> Result<Option<(PathBuf, TomlConfig)>> {
    if let Some(path) = explicit {
        let config = load_toml_config(path)?;
        return Ok(Some((path.to_path_buf(), config)));
    }

    match default_config_path() {
        Some(path) if path.exists() => {
            let config = load_toml_config(&path)?;
            Ok(Some((path, config)))
        }
        _ => Ok(None),
    }
}
