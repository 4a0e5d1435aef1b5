use super::ConnectionPool;
use crate::application::ports::{StoreTransaction, TransactionalStore};
use crate::shared::error::AppError;
use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite};

mod events;
mod mapper;
mod queries;
mod topics;
mod transaction;

pub use transaction::SqliteTransaction;

pub struct SqliteRepository {
    pool: ConnectionPool,
}

impl SqliteRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    pub async fn initialize(&self) -> Result<(), AppError> {
        self.pool.migrate().await?;
        Ok(())
    }

    pub async fn health_check(&self) -> Result<bool, AppError> {
        let result = sqlx::query("SELECT 1")
            .fetch_one(self.pool.get_pool())
            .await;
        Ok(result.is_ok())
    }
}

#[async_trait]
impl TransactionalStore for SqliteRepository {
    async fn begin(&self) -> Result<Box<dyn StoreTransaction>, AppError> {
        let tx = self.pool.get_pool().begin().await?;
        Ok(Box::new(SqliteTransaction::new(tx)))
    }
}

/// Appends `?, ?, ...)` binding each id; the caller has already opened the list.
fn push_id_list(builder: &mut QueryBuilder<'_, Sqlite>, ids: &[i64]) {
    let mut separated = builder.separated(", ");
    for id in ids {
        separated.push_bind(*id);
    }
    separated.push_unseparated(")");
}
