//! Daemon settings.
//!
//! Resolution order, lowest to highest: built-in defaults, `reservas.toml`
//! in the working directory (optional), then environment variables.

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// `[server]`: where the HTTP listener binds.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    /// Must be non-zero.
    pub port: u16,
}

/// `[storage]`
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// JSON array document holding every reservation. Created on first start
    /// when absent.
    pub data_file: PathBuf,
}

/// `[logging]`
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// An `EnvFilter` directive such as `reservasd=debug,tower_http=info`.
    pub filter: String,
}

impl Config {
    /// Resolve the settings the daemon starts with.
    ///
    /// # Errors
    ///
    /// Fails on an unreadable or malformed `reservas.toml`, and on a port of
    /// zero or an empty data file path after overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("reservas.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = var("RESERVAS_HOST") {
            self.server.host = val;
        }
        // `PORT` is honoured for platforms that inject it.
        for key in ["PORT", "RESERVAS_PORT"] {
            if let Some(port) = var(key).and_then(|val| val.parse().ok()) {
                self.server.port = port;
            }
        }
        if let Some(val) = var("RESERVAS_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Some(val) = var("RESERVAS_DATA_FILE") {
            self.storage.data_file = PathBuf::from(val);
        }
        if let Some(val) = var("RESERVAS_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.storage.data_file.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "data_file must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// `host:port`, as accepted by `TcpListener::bind`.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    #[must_use]
    pub fn data_file(&self) -> &Path {
        &self.storage.data_file
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("data/reservas.json"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "reservasd=info,reservas=info,tower_http=debug".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("reservas.toml is not valid TOML")]
    Parse(#[from] toml::de::Error),
    #[error("cannot read reservas.toml")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Validation(String),
}
