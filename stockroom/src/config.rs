//! Dashboard configuration.
//!
//! Defaults reproduce the fixed behavior of the dashboard; environment
//! variables are an optional override for embedding applications.

use chrono::Duration;
use std::path::PathBuf;

/// Default session lifetime in hours
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

/// Default minimum password length accepted at registration
pub const DEFAULT_MIN_PASSWORD_LEN: usize = 6;

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Lifetime of an issued session token
    pub token_ttl: Duration,

    /// Minimum password length (in characters) accepted at registration
    pub min_password_len: usize,

    /// Backing file for a file store; `None` keeps state in memory
    pub storage_path: Option<PathBuf>,

    /// Whether to create the demo admin account when no users exist
    pub seed_demo_user: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            token_ttl: Duration::hours(DEFAULT_TOKEN_TTL_HOURS),
            min_password_len: DEFAULT_MIN_PASSWORD_LEN,
            storage_path: None,
            seed_demo_user: true,
        }
    }
}

impl DashboardConfig {
    /// Load configuration from environment variables
    ///
    /// Recognized variables:
    /// - `INVENTORY_TOKEN_TTL_HOURS`: session lifetime (default: 24)
    /// - `INVENTORY_MIN_PASSWORD_LEN`: minimum password length (default: 6)
    /// - `INVENTORY_STORAGE_PATH`: file store location (default: in memory)
    /// - `INVENTORY_SEED_DEMO_USER`: seed the demo admin (default: true)
    ///
    /// Unparseable values fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if the TTL is out of range or a parsed
    /// value fails [`validate`](Self::validate)
    pub fn from_env() -> Result<Self, ConfigError> {
        let ttl_hours = parse_env_or("INVENTORY_TOKEN_TTL_HOURS", DEFAULT_TOKEN_TTL_HOURS);
        let token_ttl = Duration::try_hours(ttl_hours).ok_or_else(|| ConfigError::Invalid {
            var: "INVENTORY_TOKEN_TTL_HOURS".to_string(),
            reason: format!("{} hours is out of range", ttl_hours),
        })?;

        let config = Self {
            token_ttl,
            min_password_len: parse_env_or("INVENTORY_MIN_PASSWORD_LEN", DEFAULT_MIN_PASSWORD_LEN),
            storage_path: std::env::var("INVENTORY_STORAGE_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            seed_demo_user: parse_env_or("INVENTORY_SEED_DEMO_USER", true),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.token_ttl <= Duration::zero() {
            return Err(ConfigError::Invalid {
                var: "INVENTORY_TOKEN_TTL_HOURS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        if self.min_password_len == 0 {
            return Err(ConfigError::Invalid {
                var: "INVENTORY_MIN_PASSWORD_LEN".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Helper to parse environment variable with default fallback
fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 4] = [
        "INVENTORY_TOKEN_TTL_HOURS",
        "INVENTORY_MIN_PASSWORD_LEN",
        "INVENTORY_STORAGE_PATH",
        "INVENTORY_SEED_DEMO_USER",
    ];

    fn clear_env() {
        for var in VARS {
            // SAFETY: tests touching the environment are serialized
            unsafe { std::env::remove_var(var) };
        }
    }

    fn set_env(key: &str, value: &str) {
        // SAFETY: tests touching the environment are serialized
        unsafe { std::env::set_var(key, value) };
    }

    #[test]
    fn test_default_matches_constants() {
        let config = DashboardConfig::default();
        assert_eq!(config.token_ttl, Duration::hours(24));
        assert_eq!(config.min_password_len, 6);
        assert!(config.storage_path.is_none());
        assert!(config.seed_demo_user);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_from_env_without_vars_is_default() {
        clear_env();
        assert_eq!(DashboardConfig::from_env().unwrap(), DashboardConfig::default());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        set_env("INVENTORY_TOKEN_TTL_HOURS", "2");
        set_env("INVENTORY_MIN_PASSWORD_LEN", "10");
        set_env("INVENTORY_STORAGE_PATH", "/tmp/stockroom.json");
        set_env("INVENTORY_SEED_DEMO_USER", "false");

        let config = DashboardConfig::from_env().unwrap();
        assert_eq!(config.token_ttl, Duration::hours(2));
        assert_eq!(config.min_password_len, 10);
        assert_eq!(config.storage_path, Some(PathBuf::from("/tmp/stockroom.json")));
        assert!(!config.seed_demo_user);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_garbage_falls_back() {
        clear_env();
        set_env("INVENTORY_TOKEN_TTL_HOURS", "soon");
        let config = DashboardConfig::from_env().unwrap();
        assert_eq!(config.token_ttl, Duration::hours(24));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_zero_ttl() {
        clear_env();
        set_env("INVENTORY_TOKEN_TTL_HOURS", "0");
        let err = DashboardConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("INVENTORY_TOKEN_TTL_HOURS"));
        clear_env();
    }

    #[test]
    fn test_validate_rejects_zero_password_len() {
        let config = DashboardConfig {
            min_password_len: 0,
            ..DashboardConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { .. })));
    }
}
