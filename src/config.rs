//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export DATABASE_URL="sqlite://shops.db"
//! export LISTEN="127.0.0.1:8000"
//! ```
//!
//! ## Optional Variables
//!
//! - `DATABASE_URL` - SQLite URL (default: `sqlite://shops.db`, created if missing)
//! - `LISTEN` - Bind address (default: `127.0.0.1:8000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_RESET_ON_START` - Drop and recreate all tables on start (default: `true`)
//! - `DB_FOREIGN_KEYS` - Enforce foreign keys (default: `false`)
//! - `DB_MAX_CONNECTIONS`, `DB_CONNECT_TIMEOUT`, `DB_IDLE_TIMEOUT`, `DB_MAX_LIFETIME` - Pool settings

use anyhow::Result;
use std::env;

const DEFAULT_DATABASE_URL: &str = "sqlite://shops.db";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// When true, every table is dropped and recreated at start-up, so no data
    /// survives a restart.
    pub db_reset_on_start: bool,
    /// When false, references are stored unchecked and deleting a parent leaves
    /// dangling ids behind.
    pub db_foreign_keys: bool,

    // ── SqlitePool settings ─────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`, default: 30).
    pub db_connect_timeout: u64,
    /// Idle connection lifetime in seconds before it is closed
    /// (`DB_IDLE_TIMEOUT`, default: 600).
    pub db_idle_timeout: u64,
    /// Maximum connection lifetime in seconds (`DB_MAX_LIFETIME`, default: 1800).
    pub db_max_lifetime: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Every variable has a default, so this only fails on values that cannot
    /// be parsed.
    ///
    /// # Errors
    ///
    /// Returns an error if a boolean variable holds something other than
    /// `true`/`false`/`1`/`0`.
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "127.0.0.1:8000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let db_reset_on_start = parse_bool("DB_RESET_ON_START", true)?;
        let db_foreign_keys = parse_bool("DB_FOREIGN_KEYS", false)?;

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let db_connect_timeout = env::var("DB_CONNECT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let db_idle_timeout = env::var("DB_IDLE_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(600);

        let db_max_lifetime = env::var("DB_MAX_LIFETIME")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1800);

        Ok(Self {
            database_url,
            listen_addr,
            log_level,
            log_format,
            db_reset_on_start,
            db_foreign_keys,
            db_max_connections,
            db_connect_timeout,
            db_idle_timeout,
            db_max_lifetime,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `database_url` is not a SQLite URL
    /// - pool settings are zero
    pub fn validate(&self) -> Result<()> {
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

        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Reset on start: {}", self.db_reset_on_start);
        tracing::info!("  Foreign keys: {}", self.db_foreign_keys);
        tracing::info!("  Pool size: {}", self.db_max_connections);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);

        if self.db_reset_on_start {
            tracing::warn!("All tables will be dropped and recreated; stored data is not kept");
        }
    }
}

/// Reads a boolean variable, falling back to `default` when unset.
fn parse_bool(name: &str, default: bool) -> Result<bool> {
    match env::var(name) {
        Err(_) => Ok(default),
        Ok(v) if v.eq_ignore_ascii_case("true") || v == "1" => Ok(true),
        Ok(v) if v.eq_ignore_ascii_case("false") || v == "0" => Ok(false),
        Ok(v) => anyhow::bail!("{name} must be 'true' or 'false', got '{v}'"),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
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

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn base_config() -> Config {
        Config {
            database_url: "sqlite://test.db".to_string(),
            listen_addr: "127.0.0.1:8000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            db_reset_on_start: true,
            db_foreign_keys: false,
            db_max_connections: 5,
            db_connect_timeout: 30,
            db_idle_timeout: 600,
            db_max_lifetime: 1800,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = base_config();

        assert!(config.validate().is_ok());

        // Test invalid log format
        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        // Test invalid listen address
        config.listen_addr = "8000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:8000".to_string();

        // Test invalid database URL
        config.database_url = "postgres://localhost/test".to_string();
        assert!(config.validate().is_err());

        config.database_url = "sqlite::memory:".to_string();
        assert!(config.validate().is_ok());

        config.db_max_connections = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("DATABASE_URL");
            env::remove_var("LISTEN");
            env::remove_var("DB_RESET_ON_START");
            env::remove_var("DB_FOREIGN_KEYS");
            env::remove_var("DB_MAX_CONNECTIONS");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.listen_addr, "127.0.0.1:8000");
        assert!(config.db_reset_on_start);
        assert!(!config.db_foreign_keys);
        assert_eq!(config.db_max_connections, 5);
    }

    #[test]
    #[serial]
    fn test_boolean_flags() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("DB_RESET_ON_START", "0");
            env::set_var("DB_FOREIGN_KEYS", "TRUE");
        }

        let config = Config::from_env().unwrap();
        assert!(!config.db_reset_on_start);
        assert!(config.db_foreign_keys);

        unsafe {
            env::set_var("DB_FOREIGN_KEYS", "maybe");
        }
        assert!(Config::from_env().is_err());

        // Cleanup
        unsafe {
            env::remove_var("DB_RESET_ON_START");
            env::remove_var("DB_FOREIGN_KEYS");
        }
    }
}
