//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use blog_infra::DatabaseConfig;

use crate::telemetry::LogFormat;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup. Unparseable numbers fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = DatabaseConfig::default();

        let database = DatabaseConfig {
            url: lookup("DATABASE_URL").unwrap_or(defaults.url),
            name: lookup("DATABASE_NAME").unwrap_or(defaults.name),
            connect_timeout: lookup("DB_CONNECT_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.connect_timeout),
        };

        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            log_format: lookup("LOG_FORMAT")
                .and_then(|f| f.parse().ok())
                .unwrap_or_default(),
            database,
        }
    }
}
