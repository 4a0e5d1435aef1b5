use crate::domain::entities::{Event, EventConnection, Post};
use crate::shared::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Opens units of work against the store.
#[async_trait]
pub trait TransactionalStore: Send + Sync {
    async fn begin(&self) -> Result<Box<dyn StoreTransaction>, AppError>;
}

/// Writes and reads scoped to one open transaction.
///
/// Nothing is visible to other callers until [`StoreTransaction::commit`].
/// Dropping the transaction without committing discards every write.
#[async_trait]
pub trait StoreTransaction: Send {
    async fn insert_event_connection(
        &mut self,
        event_id: i64,
        topic_id: i64,
        client: &str,
    ) -> Result<EventConnection, AppError>;

    /// Existing events among `ids`, ascending by id.
    async fn find_events(&mut self, ids: &[i64]) -> Result<Vec<Event>, AppError>;

    async fn event_connections_for(
        &mut self,
        event_ids: &[i64],
    ) -> Result<Vec<EventConnection>, AppError>;

    async fn delete_event_connections(&mut self, ids: &[i64]) -> Result<u64, AppError>;

    async fn delete_event_connections_for_events(
        &mut self,
        event_ids: &[i64],
    ) -> Result<u64, AppError>;

    /// Returns the ids that were actually deleted, ascending.
    async fn delete_events(&mut self, ids: &[i64]) -> Result<Vec<i64>, AppError>;

    async fn topic_custom_field(
        &mut self,
        topic_id: i64,
        name: &str,
    ) -> Result<Option<String>, AppError>;

    async fn set_topic_custom_field(
        &mut self,
        topic_id: i64,
        name: &str,
        value: &str,
    ) -> Result<(), AppError>;

    /// The live first post of a topic, if any.
    async fn first_post(&mut self, topic_id: i64) -> Result<Option<Post>, AppError>;

    async fn post_event_exists(&mut self, post_id: i64) -> Result<bool, AppError>;

    async fn insert_post_event(&mut self, post_id: i64, event: &Event) -> Result<(), AppError>;

    async fn trash_post(&mut self, post_id: i64, at: DateTime<Utc>) -> Result<(), AppError>;

    async fn trash_topic(&mut self, topic_id: i64, at: DateTime<Utc>) -> Result<(), AppError>;

    async fn commit(self: Box<Self>) -> Result<(), AppError>;

    async fn rollback(self: Box<Self>) -> Result<(), AppError>;
}
