//! Global configuration parsing, validation, and environment overrides.

use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::{AppError, Result};

/// Environment variable overriding [`GlobalConfig::database_url`].
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Environment variable overriding [`GlobalConfig::http_port`].
pub const HTTP_PORT_ENV: &str = "KRONIX_HTTP_PORT";

/// Cross-origin policy applied to every HTTP response.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct CorsConfig {
    /// Origins permitted to call the API; `"*"` allows any origin.
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

impl CorsConfig {
    /// Resolve the `Access-Control-Allow-Origin` value for a request origin.
    ///
    /// Returns `None` when the origin is not permitted.
    #[must_use]
    pub fn allow_origin(&self, origin: Option<&str>) -> Option<String> {
        if self.allowed_origins.iter().any(|o| o == "*") {
            return Some("*".into());
        }
        let origin = origin?;
        self.allowed_origins
            .iter()
            .find(|o| o.as_str() == origin)
            .cloned()
    }
}

fn default_allowed_origins() -> Vec<String> {
    vec!["*".into()]
}

fn default_database_url() -> String {
    "sqlite://kronix.db".into()
}

fn default_http_host() -> String {
    "127.0.0.1".into()
}

fn default_http_port() -> u16 {
    8000
}

fn default_max_connections() -> u32 {
    1
}

/// Global configuration parsed from `config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct GlobalConfig {
    /// `SQLite` connection string for the tracker database.
    #[serde(default = "default_database_url")]
    pub database_url: String,
    /// Interface the HTTP server binds to.
    #[serde(default = "default_http_host")]
    pub http_host: String,
    /// Port the HTTP server binds to; 0 lets the OS pick one.
    #[serde(default = "default_http_port")]
    pub http_port: u16,
    /// Size of the connection pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Cross-origin policy.
    #[serde(default)]
    pub cors: CorsConfig,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            http_host: default_http_host(),
            http_port: default_http_port(),
            max_connections: default_max_connections(),
            cors: CorsConfig::default(),
        }
    }
}

impl GlobalConfig {
    /// Load and validate configuration from a TOML file path.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the file cannot be read or contains
    /// invalid TOML, or if validation fails.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|err| AppError::Config(format!("failed to read config: {err}")))?;
        Self::from_toml_str(&raw)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if parsing or validation fails.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `DATABASE_URL` and `KRONIX_HTTP_PORT` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if an override is present but invalid.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(
            env::var(DATABASE_URL_ENV).ok(),
            env::var(HTTP_PORT_ENV).ok(),
        )
    }

    /// Apply explicit override values, as read from the environment.
    ///
    /// Empty values are ignored.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the port is not a valid `u16`.
    pub fn apply_overrides(
        &mut self,
        database_url: Option<String>,
        http_port: Option<String>,
    ) -> Result<()> {
        if let Some(url) = database_url.filter(|v| !v.trim().is_empty()) {
            info!(env = DATABASE_URL_ENV, "database url overridden from environment");
            self.database_url = url;
        }
        if let Some(port) = http_port.filter(|v| !v.trim().is_empty()) {
            self.http_port = port.trim().parse().map_err(|err| {
                AppError::Config(format!("{HTTP_PORT_ENV} is not a valid port: {err}"))
            })?;
        }
        self.validate()
    }

    fn validate(&self) -> Result<()> {
        if self.max_connections == 0 {
            return Err(AppError::Config(
                "max_connections must be greater than zero".into(),
            ));
        }

        if self.database_url.trim().is_empty() {
            return Err(AppError::Config("database_url must not be empty".into()));
        }

        Ok(())
    }
}
