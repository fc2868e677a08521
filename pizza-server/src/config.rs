//! Server configuration, read from environment variables

use std::time::Duration;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Which [`OrderStore`](crate::db::OrderStore) backs the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// PostgreSQL at the given connection URL
    Postgres { database_url: String },
    /// Process-local map, lost on restart
    Memory,
}

/// Connection pool sizing
#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 5,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

/// pizza-server configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub store: StoreBackend,
    /// Bind host
    pub http_host: String,
    /// HTTP port
    pub http_port: u16,
    pub pool: PoolSettings,
    /// Run embedded migrations at startup (PostgreSQL only)
    pub run_migrations: bool,
    /// Emit logs as JSON lines instead of the human-readable format
    pub log_json: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        let backend = std::env::var("STORE_BACKEND").unwrap_or_else(|_| "postgres".into());
        let store = match backend.to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => StoreBackend::Postgres {
                database_url: std::env::var("DATABASE_URL")
                    .map_err(|_| "DATABASE_URL must be set when STORE_BACKEND=postgres")?,
            },
            "memory" => StoreBackend::Memory,
            other => return Err(format!("Unknown STORE_BACKEND: {other}").into()),
        };

        let defaults = PoolSettings::default();

        Ok(Self {
            store,
            http_host: std::env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            http_port: env_parse("HTTP_PORT").unwrap_or(8080),
            pool: PoolSettings {
                max_connections: env_parse("DB_MAX_CONNECTIONS")
                    .unwrap_or(defaults.max_connections),
                acquire_timeout: env_parse("DB_ACQUIRE_TIMEOUT_SECS")
                    .map(Duration::from_secs)
                    .unwrap_or(defaults.acquire_timeout),
            },
            run_migrations: std::env::var("RUN_MIGRATIONS")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(true),
            log_json: std::env::var("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
