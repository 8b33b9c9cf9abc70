//! Configuration loading
//!
//! Settings are resolved in priority order:
//! 1. Command-line overrides (which also carry `FYYUR_*` environment variables)
//! 2. TOML config file (explicit `--config`, else the per-user default location)
//! 3. Compiled defaults
//!
//! Only the database URL and the secret key matter to the application; the
//! rest is bootstrap (bind address, logging).

use crate::{Error, Result};
use rand::Rng;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://fyyur.db";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

/// Contents of `config.toml`; every key is optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub database_url: Option<String>,

    #[serde(default)]
    pub secret_key: Option<String>,

    #[serde(default)]
    pub host: Option<String>,

    #[serde(default)]
    pub port: Option<u16>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file path (optional, logs to stderr if not specified)
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Command-line configuration overrides
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_file: Option<PathBuf>,
    pub database_url: Option<String>,
    pub secret_key: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Fully resolved configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub secret_key: String,
    pub host: String,
    pub port: u16,
    pub logging: LoggingConfig,

    /// Config file the settings were read from, if any
    pub source: Option<PathBuf>,

    /// No secret key was configured and a random one was generated.
    /// Loading runs before logging is set up, so the caller reports this.
    pub secret_key_generated: bool,
}

impl Config {
    /// Resolve configuration from overrides, TOML file and defaults
    ///
    /// A config file named explicitly must exist and parse. The default
    /// per-user file is optional.
    pub fn load(overrides: ConfigOverrides) -> Result<Self> {
        let source = match &overrides.config_file {
            Some(path) => Some(path.clone()),
            None => default_config_path().filter(|path| path.exists()),
        };
        let toml_config = match &source {
            Some(path) => load_toml(path)?,
            None => TomlConfig::default(),
        };

        let mut config = Self::resolve(overrides, toml_config);
        config.source = source;
        Ok(config)
    }

    /// Merge overrides over a parsed TOML config, falling back to defaults
    pub fn resolve(overrides: ConfigOverrides, toml_config: TomlConfig) -> Self {
        let (secret_key, secret_key_generated) =
            match overrides.secret_key.or(toml_config.secret_key) {
                Some(key) if !key.is_empty() => (key, false),
                _ => (generate_secret_key(), true),
            };

        Self {
            database_url: overrides
                .database_url
                .or(toml_config.database_url)
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            secret_key,
            host: overrides
                .host
                .or(toml_config.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: overrides.port.or(toml_config.port).unwrap_or(DEFAULT_PORT),
            logging: toml_config.logging,
            source: None,
            secret_key_generated,
        }
    }

    /// Configuration for tests and tools: in-memory database, fixed secret
    pub fn in_memory(secret_key: &str) -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            secret_key: secret_key.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            logging: LoggingConfig::default(),
            source: None,
            secret_key_generated: false,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parse a TOML config file
pub fn load_toml(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Cannot read {}: {}", path.display(), e)))?;

    let config = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Invalid TOML in {}: {}", path.display(), e)))?;

    Ok(config)
}

/// Per-user config file location, e.g. `~/.config/fyyur/config.toml` on Linux
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("fyyur").join("config.toml"))
}

/// 32 random bytes, hex encoded
pub fn generate_secret_key() -> String {
    let bytes: [u8; 32] = rand::thread_rng().gen();
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
