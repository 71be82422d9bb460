//! Server configuration

use std::net::SocketAddr;
use std::time::Duration;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection URL
    pub database_url: String,
    /// Listen address
    pub http_addr: SocketAddr,
    /// Connection pool size
    pub db_max_connections: u32,
    /// How long a request waits for a pooled connection
    pub db_acquire_timeout: Duration,
    /// Environment: development | staging | production
    pub environment: String,
    /// JSON log lines instead of pretty output
    pub log_json: bool,
    /// Apply embedded migrations at startup
    pub run_migrations: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, BoxError> {
        let database_url = get("DATABASE_URL")
            .filter(|s| !s.is_empty())
            .ok_or("DATABASE_URL must be set")?;

        let log_json = match get("LOG_FORMAT").as_deref() {
            None | Some("pretty") => false,
            Some("json") => true,
            Some(other) => return Err(format!("LOG_FORMAT must be pretty or json, got {other}").into()),
        };

        Ok(Self {
            database_url,
            http_addr: parse_or(&get, "HTTP_ADDR", SocketAddr::from(([0, 0, 0, 0], 8080)))?,
            db_max_connections: parse_or(&get, "DB_MAX_CONNECTIONS", 10)?,
            db_acquire_timeout: Duration::from_secs(parse_or(&get, "DB_ACQUIRE_TIMEOUT_SECS", 5)?),
            environment: get("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            log_json,
            run_migrations: parse_or(&get, "RUN_MIGRATIONS", true)?,
        })
    }
}

fn parse_or<T>(get: &impl Fn(&str) -> Option<String>, name: &str, default: T) -> Result<T, BoxError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match get(name) {
        Some(raw) => raw
            .parse()
            .map_err(|e| -> BoxError { format!("invalid {name}={raw}: {e}").into() }),
        None => Ok(default),
    }
}
