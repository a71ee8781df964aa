use std::env;
use std::time::Duration;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// PostgreSQL URL. Without it the service runs on a detached pool.
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub database_connect_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            database_max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .and_then(|n| n.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
            database_connect_timeout: Duration::from_secs(
                lookup("DATABASE_CONNECT_TIMEOUT_SECS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS),
            ),
        }
    }
}
