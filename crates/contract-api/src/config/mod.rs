//! Configuration for the contract API service.
//!
//! Values are layered, lowest precedence first: built-in defaults, an optional
//! TOML file, `CONTRACT_API_*` environment variables, then command-line flags
//! (applied by the binary through [`ServiceConfig::with_listen`]).

use serde::{Deserialize, Serialize};
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::Path;

mod error;

pub use error::ConfigError;

pub const ENV_BIND_ADDRESS: &str = "CONTRACT_API_BIND_ADDRESS";
pub const ENV_ENABLE_DEBUG_RESET: &str = "CONTRACT_API_ENABLE_DEBUG_RESET";
pub const ENV_CHANNEL_BUFFER: &str = "CONTRACT_API_CHANNEL_BUFFER";
pub const ENV_SEED_DATA: &str = "CONTRACT_API_SEED_DATA";
pub const ENV_LOG_LEVEL: &str = "CONTRACT_API_LOG_LEVEL";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main service configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server bind address
    pub bind_address: SocketAddr,

    /// Expose `POST /debug/reset`
    pub enable_debug_reset: bool,

    /// Name reported by `GET /config`
    pub service_name: String,
}

/// Store configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Request channel capacity of each store actor
    pub channel_buffer: usize,

    /// Load the sample items and the admin user at startup
    pub seed_data: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    pub level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([0, 0, 0, 0], 3000)),
            enable_debug_reset: true,
            service_name: "contract-api".to_string(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            seed_data: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl ServiceConfig {
    /// Defaults, then `path` if given, then the process environment. The result
    /// is validated.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::read_file(path)?,
            None => Self::default(),
        };
        let config = config.apply_env_from(|key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn read_file(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Overrides fields from environment variables, read through `lookup` so
    /// tests need not touch the real environment.
    pub fn apply_env_from<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup(ENV_BIND_ADDRESS) {
            self.server.bind_address = addr
                .parse()
                .map_err(|e| ConfigError::InvalidValue(format!("Invalid bind address: {}", e)))?;
        }
        if let Some(flag) = lookup(ENV_ENABLE_DEBUG_RESET) {
            self.server.enable_debug_reset = flag
                .parse()
                .map_err(|e| ConfigError::InvalidValue(format!("Invalid debug reset flag: {}", e)))?;
        }
        if let Some(buffer) = lookup(ENV_CHANNEL_BUFFER) {
            self.store.channel_buffer = buffer
                .parse()
                .map_err(|e| ConfigError::InvalidValue(format!("Invalid channel buffer: {}", e)))?;
        }
        if let Some(flag) = lookup(ENV_SEED_DATA) {
            self.store.seed_data = flag
                .parse()
                .map_err(|e| ConfigError::InvalidValue(format!("Invalid seed flag: {}", e)))?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }
        Ok(self)
    }

    /// Applies `--host` / `--port` on top of the bind address.
    pub fn with_listen(mut self, host: Option<&str>, port: Option<u16>) -> Result<Self, ConfigError> {
        if let Some(host) = host {
            self.server.bind_address.set_ip(
                host.parse::<IpAddr>()
                    .map_err(|e| ConfigError::InvalidValue(format!("Invalid host: {}", e)))?,
            );
        }
        if let Some(port) = port {
            self.server.bind_address.set_port(port);
        }
        Ok(self)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.channel_buffer == 0 {
            return Err(ConfigError::ValidationFailed(
                "channel_buffer must be greater than 0".to_string(),
            ));
        }

        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::ValidationFailed(format!(
                "Invalid log level: {}",
                self.logging.level
            )));
        }

        Ok(())
    }
}
