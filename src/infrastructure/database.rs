use serde::Serialize;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use crate::config::DatabaseConfig;

/// Result row of the health check query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct DbStatus {
    pub ok: i64,
}

/// Creates the connection pool shared by every handler
///
/// Connections are opened lazily on first use, so this never touches the
/// network. Callers queue when all `pool_size` connections are busy, by
/// default without a time limit.
pub fn create_pool(config: &DatabaseConfig) -> MySqlPool {
    tracing::debug!(
        max_connections = config.pool_size,
        "Creating database pool for {}",
        config
    );

    MySqlPoolOptions::new()
        .max_connections(config.pool_size)
        .acquire_timeout(config.acquire_timeout())
        .connect_lazy_with(config.connect_options())
}

/// Runs a trivial round-trip query against the database
pub async fn ping(pool: &MySqlPool) -> Result<DbStatus, sqlx::Error> {
    sqlx::query_as::<_, DbStatus>("SELECT 1 AS ok")
        .fetch_one(pool)
        .await
}
