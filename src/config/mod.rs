//! Configuration Module
//!
//! Centralized configuration management for the account service: database,
//! cache, and password-hashing settings.

use crate::database::DatabaseConfig;
use crate::utils::security::DEFAULT_BCRYPT_COST;

/// Environment variable helpers
pub mod env {
    use std::env;

    /// Get environment variable as string with default
    pub fn get_string(key: &str, default: &str) -> String {
        env::var(key).unwrap_or_else(|_| default.to_string())
    }

    /// Get environment variable as boolean with default
    pub fn get_bool(key: &str, default: bool) -> bool {
        env::var(key)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Get environment variable as u32 with default
    pub fn get_u32(key: &str, default: u32) -> u32 {
        env::var(key)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Get environment variable as u64 with default
    pub fn get_u64(key: &str, default: u64) -> u64 {
        env::var(key)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }
}

/// Top-level application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Relational store settings
    pub database: DatabaseConfig,

    /// Redis connection URL for the token blacklist
    pub redis_url: String,

    /// bcrypt cost factor for password hashing
    pub bcrypt_cost: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            redis_url: "redis://127.0.0.1:6379".to_string(),
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset. `DATABASE_URL` is the only required
    /// variable when the database section comes from the environment.
    pub fn from_env() -> Self {
        let database = DatabaseConfig::from_env().unwrap_or_default();

        Self {
            database,
            redis_url: env::get_string("REDIS_URL", "redis://127.0.0.1:6379"),
            bcrypt_cost: env::get_u32("BCRYPT_COST", DEFAULT_BCRYPT_COST),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.redis_url, "redis://127.0.0.1:6379");
        assert_eq!(config.bcrypt_cost, DEFAULT_BCRYPT_COST);
        assert!(config.database.url.starts_with("sqlite://"));
    }

    #[test]
    fn test_env_helpers_fall_back_to_defaults() {
        assert_eq!(
            env::get_string("ACCOUNT_SERVICE_UNSET_VAR", "fallback"),
            "fallback"
        );
        assert!(env::get_bool("ACCOUNT_SERVICE_UNSET_VAR", true));
        assert_eq!(env::get_u32("ACCOUNT_SERVICE_UNSET_VAR", 7), 7);
        assert_eq!(env::get_u64("ACCOUNT_SERVICE_UNSET_VAR", 9), 9);
    }
}
