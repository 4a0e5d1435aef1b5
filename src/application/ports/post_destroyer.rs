use super::StoreTransaction;
use crate::shared::error::AppError;
use async_trait::async_trait;

/// Removes a topic by destroying its first post.
#[async_trait]
pub trait PostDestroyer: Send + Sync {
    /// Returns `false` when the topic has no live first post.
    async fn destroy_first_post(
        &self,
        tx: &mut dyn StoreTransaction,
        topic_id: i64,
    ) -> Result<bool, AppError>;
}
