use anyhow::{anyhow, Result};
use sqlx::postgres::PgSslMode;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

pub const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:4000";
pub const DEFAULT_NOTIFY_CHANNEL: &str = "new_row_channel";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";
pub const DEFAULT_RELAY_URL: &str = "ws://localhost:4000/ws";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppMode {
    Relay,
    Client,
}

impl FromStr for AppMode {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "relay" => Ok(Self::Relay),
            "client" => Ok(Self::Client),
            other => Err(anyhow!("unknown APP_MODE: {}", other)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub app_mode: AppMode,
    pub http_addr: String,
    /// Required in relay mode only.
    pub database_url: Option<String>,
    pub notify_channel: String,
    pub cors_origin: String,
    pub db_ssl_mode: Option<PgSslMode>,
    pub db_max_connections: u32,
    pub db_connect_timeout_seconds: u64,
    pub broadcast_capacity: usize,
    pub synthetic_interval_seconds: u64,
    pub synthetic_probability: f64,
    pub relay_url: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let app_mode: AppMode = env_or("APP_MODE", "relay").parse()?;

        let http_addr = env_or("HTTP_ADDR", DEFAULT_HTTP_ADDR);
        let _parsed_http_addr = SocketAddr::from_str(&http_addr)
            .map_err(|err| anyhow!("invalid HTTP_ADDR: {}", err))?;

        let database_url = match app_mode {
            AppMode::Relay => Some(env_or_err("DATABASE_URL")?),
            AppMode::Client => std::env::var("DATABASE_URL").ok(),
        };

        let notify_channel = env_or("NOTIFY_CHANNEL", DEFAULT_NOTIFY_CHANNEL);
        if notify_channel.trim().is_empty() {
            return Err(anyhow!("invalid NOTIFY_CHANNEL: must not be empty"));
        }

        let db_ssl_mode = match std::env::var("DB_SSL_MODE") {
            Ok(value) => Some(
                value
                    .parse::<PgSslMode>()
                    .map_err(|err| anyhow!("invalid DB_SSL_MODE: {}", err))?,
            ),
            Err(_) => None,
        };

        // One connection stays parked on LISTEN; the health check needs another.
        let db_max_connections: u32 = env_or_parse("DB_MAX_CONNECTIONS", "2")?;
        if db_max_connections < 2 {
            return Err(anyhow!("invalid DB_MAX_CONNECTIONS: must be at least 2"));
        }

        let broadcast_capacity: usize = env_or_parse("BROADCAST_CAPACITY", "1024")?;
        if broadcast_capacity == 0 {
            return Err(anyhow!("invalid BROADCAST_CAPACITY: must be at least 1"));
        }

        let synthetic_probability: f64 = env_or_parse("SYNTHETIC_PROBABILITY", "0.3")?;
        if !(0.0..=1.0).contains(&synthetic_probability) {
            return Err(anyhow!(
                "invalid SYNTHETIC_PROBABILITY: expected a value between 0 and 1"
            ));
        }

        let relay_url = env_or("RELAY_URL", DEFAULT_RELAY_URL);
        let parsed_relay_url =
            Url::parse(&relay_url).map_err(|err| anyhow!("invalid RELAY_URL: {}", err))?;
        if !matches!(parsed_relay_url.scheme(), "ws" | "wss") {
            return Err(anyhow!("invalid RELAY_URL: expected a ws:// or wss:// url"));
        }

        Ok(Self {
            app_mode,
            http_addr,
            database_url,
            notify_channel,
            cors_origin: env_or("CORS_ORIGIN", DEFAULT_CORS_ORIGIN),
            db_ssl_mode,
            db_max_connections,
            db_connect_timeout_seconds: env_or_parse("DB_CONNECT_TIMEOUT_SECONDS", "5")?,
            broadcast_capacity,
            synthetic_interval_seconds: env_or_parse("SYNTHETIC_INTERVAL_SECONDS", "15")?,
            synthetic_probability,
            relay_url,
        })
    }

    /// `None` when the synthetic feed is disabled.
    pub fn synthetic_interval(&self) -> Option<Duration> {
        match self.synthetic_interval_seconds {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_or_err(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| anyhow!("missing required env var: {}", key))
}

fn env_or_parse<T>(key: &str, default: &str) -> Result<T>
where
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Display,
{
    let value = std::env::var(key).unwrap_or_else(|_| default.to_string());
    value
        .parse::<T>()
        .map_err(|err| anyhow!("invalid {}: {}", key, err))
}
