//! Server State

use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// Shared application state - configuration plus the database pool.
///
/// Clone is shallow (the pool is internally reference-counted), so handlers
/// receive it by value through axum's `State` extractor.
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub pool: SqlitePool,
}

impl ServerState {
    /// Open the configured database and apply migrations
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_path).await?;
        Ok(Self {
            config: config.clone(),
            pool: db.pool,
        })
    }

    /// State backed by an in-memory database (tests and local demos)
    pub async fn in_memory(config: Config) -> Result<Self, AppError> {
        let db = DbService::in_memory().await?;
        Ok(Self {
            config,
            pool: db.pool,
        })
    }
}
