//! Configuration management for the address book.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is read if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default snapshot file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "address_book.json";

/// Configuration for the address book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Snapshot file path (default: "address_book.json")
    pub data_file: PathBuf,

    /// Records per page for `show page` (default: 5)
    pub page_size: usize,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_FILE`: Snapshot file path (default: "address_book.json")
    /// - `ADDRESS_BOOK_PAGE_SIZE`: Records per page (default: 5)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let data_file = match env::var("ADDRESS_BOOK_FILE") {
            Ok(val) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "ADDRESS_BOOK_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(val) => PathBuf::from(val),
            Err(_) => PathBuf::from(DEFAULT_DATA_FILE),
        };

        let page_size = Self::parse_env_usize("ADDRESS_BOOK_PAGE_SIZE", 5)?;
        if page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_PAGE_SIZE".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            data_file,
            page_size,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            page_size: 5,
            log_level: "warn".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.data_file, PathBuf::from("address_book.json"));
        assert_eq!(config.page_size, 5);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESS_BOOK_FILE", "/tmp/contacts.json");
        guard.set("ADDRESS_BOOK_PAGE_SIZE", "20");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.data_file, PathBuf::from("/tmp/contacts.json"));
        assert_eq!(config.page_size, 20);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_from_env_empty_file() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESS_BOOK_FILE", "  ");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "ADDRESS_BOOK_FILE"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_zero_page_size() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESS_BOOK_PAGE_SIZE", "0");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "ADDRESS_BOOK_PAGE_SIZE")
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_usize() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_USIZE", "42");

        assert_eq!(Config::parse_env_usize("TEST_USIZE", 10).unwrap(), 42);
        assert_eq!(Config::parse_env_usize("NONEXISTENT_USIZE", 10).unwrap(), 10);
    }

    #[test]
    #[serial]
    fn test_parse_env_usize_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_USIZE_INVALID", "not-a-number");

        assert!(Config::parse_env_usize("TEST_USIZE_INVALID", 10).is_err());
    }
}
