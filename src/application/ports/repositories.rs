use crate::domain::entities::{Event, EventListing, Topic};
use crate::domain::value_objects::{EventFilter, EventOrder, SortDirection};
use crate::shared::error::AppError;
use async_trait::async_trait;

/// Fully resolved listing query. Column and direction are already allow-listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventListQuery {
    pub filter: Option<EventFilter>,
    pub order: EventOrder,
    pub direction: SortDirection,
    pub limit: i64,
    pub offset: i64,
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn get_event(&self, id: i64) -> Result<Option<Event>, AppError>;
    async fn list_events(&self, query: &EventListQuery) -> Result<Vec<EventListing>, AppError>;
    async fn count_events(&self, filter: Option<EventFilter>) -> Result<u64, AppError>;
}

#[async_trait]
pub trait TopicRepository: Send + Sync {
    /// Live topics only; trashed topics read as absent.
    async fn get_topic(&self, id: i64) -> Result<Option<Topic>, AppError>;
}
