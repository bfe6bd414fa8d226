use anyhow::{anyhow, Result};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use std::str::FromStr;
use std::time::Duration;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    pub async fn connect(config: &AppConfig) -> Result<Self> {
        let options = connect_options(config)?;
        let pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(Duration::from_secs(config.db_connect_timeout_seconds))
            .connect_with(options)
            .await?;
        Ok(Self { pool })
    }

    /// Builds a pool without opening a connection; the first query connects.
    pub fn connect_lazy(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_secs(1))
            .connect_lazy(database_url)?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

fn connect_options(config: &AppConfig) -> Result<PgConnectOptions> {
    let database_url = config
        .database_url
        .as_deref()
        .ok_or_else(|| anyhow!("missing required env var: DATABASE_URL"))?;
    let mut options = PgConnectOptions::from_str(database_url)
        .map_err(|err| anyhow!("invalid DATABASE_URL: {}", err))?;
    // Hosted Postgres needs TLS; `require` encrypts without verifying the chain.
    if let Some(mode) = config.db_ssl_mode {
        options = options.ssl_mode(mode);
    }
    Ok(options)
}
