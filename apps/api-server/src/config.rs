//! Application configuration loaded from environment variables.

use std::env;

use feedline_infra::DatabaseConfig;

use crate::telemetry::TelemetryConfig;

/// Largest accepted JSON request body when `MAX_BODY_BYTES` is unset.
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    /// Apply pending schema migrations before serving.
    pub auto_migrate: bool,
    /// Request bodies above this size are rejected with 413.
    pub max_body_bytes: usize,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`. Unparseable numbers fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let database = lookup("DATABASE_URL").map(|url| DatabaseConfig {
            url,
            max_connections: lookup("DB_MAX_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(100),
            min_connections: lookup("DB_MIN_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        });

        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database,
            auto_migrate: lookup("DB_AUTO_MIGRATE").is_some_and(|v| v == "true" || v == "1"),
            max_body_bytes: lookup("MAX_BODY_BYTES")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_BODY_BYTES),
            telemetry: TelemetryConfig::from_lookup(&lookup),
        }
    }
}
