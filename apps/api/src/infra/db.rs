use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::config::db::DbConfig;
use crate::errors::domain::DomainError;

/// Builds the shared connection pool for the lifetime of the process.
///
/// Pooling policy: one bounded pool shared across requests; each statement
/// checks a connection out for its own duration and RAII returns it on every
/// exit path. Connect and acquire are both capped so a dead database surfaces
/// as `DomainError::Db` instead of a hang.
pub async fn connect_db(config: &DbConfig) -> Result<DatabaseConnection, DomainError> {
    let mut options = ConnectOptions::new(config.url());
    options
        .max_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(false);

    Database::connect(options)
        .await
        .map_err(|e| DomainError::db(format!("Failed to connect to database '{}': {e}", config.name)))
}
