//! Configuration management for the HubSpot list synchronizer.
//!
//! Configuration is read once from the environment (optionally seeded from a
//! `.env` file) and then handed to components through their constructors.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default HubSpot API base URL.
pub const DEFAULT_API_URL: &str = "https://api.hubapi.com";

/// Configuration for the synchronizer.
#[derive(Debug, Clone)]
pub struct Config {
    /// HubSpot API base URL
    pub hubspot_api_url: String,

    /// HubSpot API key, used when a caller does not supply its own
    pub hubspot_api_key: String,

    /// Path of the CSV file imported at startup
    pub csv_path: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Contacts requested per page when walking a collection (default: 100)
    pub page_size: usize,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `HUBSPOT_API_KEY`: API key for authentication
    ///
    /// Optional environment variables:
    /// - `HUBSPOT_API_BASE_URL`: Base URL (default: https://api.hubapi.com)
    /// - `CONTACTS_CSV_PATH`: CSV file to import (default: Contatos.csv)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `PAGE_SIZE`: Contacts per page request (default: 100)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let hubspot_api_key = env::var("HUBSPOT_API_KEY")
            .map_err(|_| ConfigError::MissingVar("HUBSPOT_API_KEY".to_string()))?;

        if hubspot_api_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "HUBSPOT_API_KEY".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let hubspot_api_url =
            env::var("HUBSPOT_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        if !hubspot_api_url.starts_with("http://") && !hubspot_api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "HUBSPOT_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let csv_path = env::var("CONTACTS_CSV_PATH").unwrap_or_else(|_| "Contatos.csv".to_string());
        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let page_size = Self::parse_env_usize("PAGE_SIZE", 100)?;

        if page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "PAGE_SIZE".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            hubspot_api_url,
            hubspot_api_key,
            csv_path,
            request_timeout,
            page_size,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
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
            hubspot_api_url: DEFAULT_API_URL.to_string(),
            hubspot_api_key: String::new(),
            csv_path: "Contatos.csv".to_string(),
            request_timeout: 10,
            page_size: 100,
            log_level: "info".to_string(),
        }
    }
}
