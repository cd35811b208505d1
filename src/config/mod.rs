//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `ORGBOARD_` prefix and nested values use double
//! underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use orgboard_session::config::SessionConfig;
//!
//! let config = SessionConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Auth backend at {}", config.api.base_url);
//! ```

mod api;
mod error;
mod routes;
mod storage;

pub use api::ApiConfig;
pub use error::{ConfigError, ValidationError};
pub use routes::RoutesConfig;
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root session-core configuration
///
/// Contains all configuration sections for the session core. Load using
/// [`SessionConfig::load()`] which reads from environment variables. Every
/// section has working defaults, so an empty environment yields a valid
/// development configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Auth backend API configuration (base URL, timeout)
    #[serde(default)]
    pub api: ApiConfig,

    /// Token storage configuration (persisted token path)
    #[serde(default)]
    pub storage: StorageConfig,

    /// Redirect route configuration (login/unauthorized paths)
    #[serde(default)]
    pub routes: RoutesConfig,

    /// Environment name
    #[serde(default)]
    pub environment: Environment,

    /// Rust log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Application environment
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Check if this is the production environment
    pub fn is_production(&self) -> bool {
        *self == Environment::Production
    }
}

impl SessionConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `ORGBOARD` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `ORGBOARD__API__BASE_URL=https://api.example.com` -> `api.base_url`
    /// - `ORGBOARD__STORAGE__TOKEN_PATH=/var/lib/orgboard/token` -> `storage.token_path`
    /// - `ORGBOARD__ROUTES__LOGIN_PATH=/signin` -> `routes.login_path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the expected
    /// types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ORGBOARD")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// Performs semantic validation of configuration:
    /// - URL format and HTTPS-in-production for the API base URL
    /// - Timeout range
    /// - Non-empty token path
    /// - Absolute route paths
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.api.validate(&self.environment)?;
        self.storage.validate()?;
        self.routes.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            storage: StorageConfig::default(),
            routes: RoutesConfig::default(),
            environment: Environment::default(),
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info,orgboard_session=debug".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to set environment variables for testing
    /// Uses double underscores to separate nested config values
    fn set_full_env() {
        env::set_var("ORGBOARD__API__BASE_URL", "https://api.example.com");
        env::set_var("ORGBOARD__API__TIMEOUT_SECS", "30");
        env::set_var("ORGBOARD__STORAGE__TOKEN_PATH", "/var/lib/orgboard/token");
        env::set_var("ORGBOARD__ROUTES__LOGIN_PATH", "/signin");
        env::set_var("ORGBOARD__ROUTES__UNAUTHORIZED_PATH", "/unauthorized");
    }

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("ORGBOARD__API__BASE_URL");
        env::remove_var("ORGBOARD__API__TIMEOUT_SECS");
        env::remove_var("ORGBOARD__STORAGE__TOKEN_PATH");
        env::remove_var("ORGBOARD__ROUTES__LOGIN_PATH");
        env::remove_var("ORGBOARD__ROUTES__UNAUTHORIZED_PATH");
        env::remove_var("ORGBOARD__ENVIRONMENT");
        env::remove_var("ORGBOARD__LOG_LEVEL");
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = SessionConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.api.base_url, "http://localhost:5000");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.storage.token_path, ".orgboard/session-token");
        assert_eq!(config.routes.login_path, "/login");
        assert_eq!(config.environment, Environment::Development);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_full_env();
        let result = SessionConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.api.base_url, "https://api.example.com");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.storage.token_path, "/var/lib/orgboard/token");
        assert_eq!(config.routes.login_path, "/signin");
        assert_eq!(
            config.routes.unauthorized_path.as_deref(),
            Some("/unauthorized")
        );
    }

    #[test]
    fn test_validate_full_config() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_full_env();
        let result = SessionConfig::load();
        clear_env();

        assert!(result.is_ok());
        let config = result.unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_full_env();
        env::set_var("ORGBOARD__ENVIRONMENT", "production");
        let result = SessionConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
        // HTTPS base URL from set_full_env satisfies the production rule.
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_production_with_http_url_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("ORGBOARD__ENVIRONMENT", "production");
        let result = SessionConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::BaseUrlMustBeHttps)
        ));
    }

    #[test]
    fn test_custom_log_level() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("ORGBOARD__LOG_LEVEL", "warn");
        let result = SessionConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.log_level, "warn");
    }
}
