//! PostgreSQL connection pool.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use crudhub_core::config::DatabaseConfig;
use crudhub_core::error::{AppError, ErrorKind};
use crudhub_core::result::AppResult;

/// Shared handle to the PostgreSQL pool backing the repositories.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    /// Open a pool for `config.url`.
    ///
    /// An empty URL is a configuration error rather than a connect failure.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let url = config.url.trim();
        if url.is_empty() {
            return Err(AppError::configuration(
                "database.url is required for the postgres provider",
            ));
        }

        info!(
            url = %redact_url(url),
            max_connections = config.max_connections,
            "Opening PostgreSQL pool"
        );

        let pool = pool_options(config).connect(url).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, format!("Cannot reach database: {e}"), e)
        })?;

        info!("PostgreSQL pool ready");
        Ok(Self { pool })
    }

    /// The sqlx pool, for repositories and migrations.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Round-trip a trivial query.
    pub async fn health_check(&self) -> AppResult<bool> {
        let one: i32 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Database ping failed", e))?;
        Ok(one == 1)
    }

    /// Wait for checked-out connections to return, then close them all.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("PostgreSQL pool closed");
    }
}

/// Pool sizing and timeouts taken from configuration.
fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections.min(config.max_connections))
        .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
}

/// Replace the password in a connection URL with `****`.
fn redact_url(url: &str) -> String {
    let authority_start = url.find("://").map(|p| p + 3).unwrap_or(0);
    let Some(at) = url.rfind('@').filter(|&at| at >= authority_start) else {
        return url.to_string();
    };

    match url[authority_start..at].split_once(':') {
        Some((user, _password)) => {
            format!("{}{user}:****{}", &url[..authority_start], &url[at..])
        }
        None => url.to_string(),
    }
}
