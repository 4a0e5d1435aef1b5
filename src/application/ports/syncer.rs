use super::StoreTransaction;
use crate::domain::entities::{Event, Topic, TopicWithEvent};
use crate::shared::error::AppError;
use async_trait::async_trait;

/// Materialises an event into a topic on behalf of one sync client.
#[async_trait]
pub trait Syncer: Send + Sync {
    /// Registry key of this syncer.
    fn client(&self) -> &'static str;

    /// `Ok(None)` means the sync was refused; the caller rolls back.
    async fn connect_event_to_topic(
        &self,
        tx: &mut dyn StoreTransaction,
        topic: &Topic,
        event: &Event,
    ) -> Result<Option<TopicWithEvent>, AppError>;
}
