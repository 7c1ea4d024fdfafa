//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Admin API version used when `SHOPIFY_API_VERSION` is not set.
pub const DEFAULT_API_VERSION: &str = "2024-10";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Path to the SQLite database holding the Shopify credential
    pub db_path: PathBuf,
    /// Lifetime of every cached response, in milliseconds
    pub cache_ttl_ms: u64,
    /// Shopify Admin API version segment of the GraphQL endpoint
    pub api_version: String,
    /// Per-request timeout for upstream GraphQL calls, in milliseconds
    pub upstream_timeout_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `PORT` - HTTP server port (default: 3000)
    /// - `DB_PATH` - Credential database path (default: ./main.db)
    /// - `CACHE_TTL_MS` - Cache TTL in milliseconds (default: 60000)
    /// - `SHOPIFY_API_VERSION` - Admin API version (default: 2024-10)
    /// - `UPSTREAM_TIMEOUT_MS` - Upstream request timeout (default: 20000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_var("PORT").unwrap_or(defaults.server_port),
            db_path: env::var("DB_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.db_path),
            cache_ttl_ms: parse_var("CACHE_TTL_MS").unwrap_or(defaults.cache_ttl_ms),
            api_version: env::var("SHOPIFY_API_VERSION")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.api_version),
            upstream_timeout_ms: parse_var("UPSTREAM_TIMEOUT_MS")
                .unwrap_or(defaults.upstream_timeout_ms),
        }
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_millis(self.cache_ttl_ms)
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_millis(self.upstream_timeout_ms)
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            db_path: PathBuf::from("./main.db"),
            cache_ttl_ms: 60_000,
            api_version: DEFAULT_API_VERSION.to_string(),
            upstream_timeout_ms: 20_000,
        }
    }
}
