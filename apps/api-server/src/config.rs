//! Application configuration loaded from environment variables.

use std::env;

use postdesk_infra::database::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` when `DATABASE_URL` is unset; the server then runs in-memory.
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: parse_or("DB_MAX_CONNECTIONS", 100),
            min_connections: parse_or("DB_MIN_CONNECTIONS", 10),
            sync_schema: env::var("DB_SYNC_SCHEMA")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_or("PORT", 8080),
            database,
        }
    }
}

/// Unset or unparseable values fall back to `default`.
fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
