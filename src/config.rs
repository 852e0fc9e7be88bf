//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! Variables may come from the process environment or from a dotenv file
//! (see `--config` in `main.rs`).
//!
//! ## Required Variables
//!
//! - `STORAGE_PATH` - SQLite database file (created if missing)
//! - `HTTP_USER`, `HTTP_PASSWORD` - basic-auth credentials for `POST /url`
//!
//! ## Optional Variables
//!
//! - `APP_ENV` - `local`, `dev` or `prod` (default: `local`)
//! - `LISTEN` - Bind address (default: `localhost:8000`)
//! - `HTTP_TIMEOUT` - Per-request timeout in seconds (default: 4)
//! - `ALIAS_LENGTH` - Length of generated aliases (default: 6, range: 4-32)
//! - `RUST_LOG` - Log filter (default: `debug` for local/dev, `info` for prod)
//! - `LOG_FORMAT` - `text` or `json` (default: `text` for local, `json` otherwise)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `DB_CONNECT_TIMEOUT` - Pool acquire timeout in seconds (default: 30)

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::utils::alias_generator::{ALIAS_LENGTH_RANGE, DEFAULT_ALIAS_LENGTH};

/// Deployment environment. Selects logging defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Local,
    Dev,
    Prod,
}

impl AppEnv {
    pub fn default_log_level(&self) -> &'static str {
        match self {
            AppEnv::Local | AppEnv::Dev => "debug",
            AppEnv::Prod => "info",
        }
    }

    pub fn default_log_format(&self) -> &'static str {
        match self {
            AppEnv::Local => "text",
            AppEnv::Dev | AppEnv::Prod => "json",
        }
    }
}

impl FromStr for AppEnv {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(AppEnv::Local),
            "dev" => Ok(AppEnv::Dev),
            "prod" => Ok(AppEnv::Prod),
            other => anyhow::bail!("APP_ENV must be 'local', 'dev' or 'prod', got '{}'", other),
        }
    }
}

impl fmt::Display for AppEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AppEnv::Local => "local",
            AppEnv::Dev => "dev",
            AppEnv::Prod => "prod",
        };
        f.write_str(name)
    }
}

/// Service configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    pub env: AppEnv,
    pub storage_path: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Per-request time limit in seconds.
    pub http_timeout: u64,
    pub http_user: String,
    pub http_password: String,
    /// Length of generated aliases.
    pub alias_length: usize,

    // ── SqlitePool settings ─────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`, default: 30).
    pub db_connect_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or `APP_ENV` is unknown.
    pub fn from_env() -> Result<Self> {
        let app_env = env::var("APP_ENV")
            .ok()
            .map(|v| v.parse::<AppEnv>())
            .transpose()?
            .unwrap_or(AppEnv::Local);

        let storage_path = env::var("STORAGE_PATH").context("STORAGE_PATH must be set")?;
        let http_user = env::var("HTTP_USER").context("HTTP_USER must be set")?;
        let http_password = env::var("HTTP_PASSWORD").context("HTTP_PASSWORD must be set")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "localhost:8000".to_string());
        let log_level =
            env::var("RUST_LOG").unwrap_or_else(|_| app_env.default_log_level().to_string());
        let log_format =
            env::var("LOG_FORMAT").unwrap_or_else(|_| app_env.default_log_format().to_string());

        let http_timeout = parse_or("HTTP_TIMEOUT", 4);
        let alias_length = parse_or("ALIAS_LENGTH", DEFAULT_ALIAS_LENGTH);
        let db_max_connections = parse_or("DB_MAX_CONNECTIONS", 5);
        let db_connect_timeout = parse_or("DB_CONNECT_TIMEOUT", 30);

        Ok(Self {
            env: app_env,
            storage_path,
            listen_addr,
            log_level,
            log_format,
            http_timeout,
            http_user,
            http_password,
            alias_length,
            db_max_connections,
            db_connect_timeout,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `storage_path` is empty
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `alias_length` is outside 4-32
    /// - a timeout or the pool size is zero
    /// - credentials are empty
    pub fn validate(&self) -> Result<()> {
        if self.storage_path.trim().is_empty() {
            anyhow::bail!("STORAGE_PATH must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !ALIAS_LENGTH_RANGE.contains(&self.alias_length) {
            anyhow::bail!(
                "ALIAS_LENGTH must be between {} and {}, got {}",
                ALIAS_LENGTH_RANGE.start(),
                ALIAS_LENGTH_RANGE.end(),
                self.alias_length
            );
        }

        if self.http_timeout == 0 {
            anyhow::bail!("HTTP_TIMEOUT must be greater than 0");
        }

        if self.http_user.is_empty() || self.http_password.is_empty() {
            anyhow::bail!("HTTP_USER and HTTP_PASSWORD must not be empty");
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }

    pub fn db_acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.db_connect_timeout)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Environment: {}", self.env);
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Storage: {}", self.storage_path);
        tracing::info!("  Request timeout: {}s", self.http_timeout);
        tracing::info!("  Basic auth user: {}", self.http_user);
        tracing::info!("  Alias length: {}", self.alias_length);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("env", &self.env)
            .field("storage_path", &self.storage_path)
            .field("listen_addr", &self.listen_addr)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .field("http_timeout", &self.http_timeout)
            .field("http_user", &self.http_user)
            .field("http_password", &"***")
            .field("alias_length", &self.alias_length)
            .field("db_max_connections", &self.db_max_connections)
            .field("db_connect_timeout", &self.db_connect_timeout)
            .finish()
    }
}

/// Reads `key` and parses it, falling back to `default` when unset or unparsable.
fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
