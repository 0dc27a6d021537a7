//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::menu::DEFAULT_CAPACITY;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port (default: 3000).
    pub port: u16,

    /// Base URL of the warehouse REST API (default: http://localhost:8080/api).
    pub api_base_url: String,

    /// YAML navigation tree replacing the built-in one.
    pub navigation_file: Option<PathBuf>,

    /// Maximum number of memoized filtered trees (default: 1000).
    pub nav_cache_capacity: u64,

    /// Timeout for authentication service requests (default: 10s).
    pub auth_timeout: Duration,

    /// CORS allowed origins (comma-separated, default: "*").
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from `lookup`, which maps a variable name to its
    /// value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .context("PORT must be a valid u16")?;

        let api_base_url =
            lookup("API_BASE_URL").unwrap_or_else(|| "http://localhost:8080/api".to_string());

        let navigation_file = lookup("NAVIGATION_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let nav_cache_capacity = lookup("NAV_CACHE_CAPACITY")
            .unwrap_or_else(|| DEFAULT_CAPACITY.to_string())
            .parse()
            .context("NAV_CACHE_CAPACITY must be a valid u64")?;

        let auth_timeout_secs: u64 = lookup("AUTH_TIMEOUT_SECS")
            .unwrap_or_else(|| "10".to_string())
            .parse()
            .context("AUTH_TIMEOUT_SECS must be a valid u64")?;

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_else(|| vec!["*".to_string()]);

        Ok(Self {
            port,
            api_base_url,
            navigation_file,
            nav_cache_capacity,
            auth_timeout: Duration::from_secs(auth_timeout_secs),
            cors_allowed_origins,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            api_base_url: "http://localhost:8080/api".to_string(),
            navigation_file: None,
            nav_cache_capacity: DEFAULT_CAPACITY,
            auth_timeout: Duration::from_secs(10),
            cors_allowed_origins: vec!["*".to_string()],
        }
    }
}
