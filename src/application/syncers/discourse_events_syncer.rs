use crate::application::ports::{StoreTransaction, Syncer};
use crate::domain::entities::{Event, Topic, TopicWithEvent};
use crate::shared::error::AppError;
use async_trait::async_trait;
use tracing::debug;

pub(crate) const EVENT_ID_FIELD: &str = "event_id";
pub(crate) const EVENT_START_FIELD: &str = "event_start";
pub(crate) const EVENT_END_FIELD: &str = "event_end";
pub(crate) const EVENT_NAME_FIELD: &str = "event_name";

/// Stores the event on the topic itself as custom fields.
#[derive(Debug, Default)]
pub struct DiscourseEventsSyncer;

impl DiscourseEventsSyncer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Syncer for DiscourseEventsSyncer {
    fn client(&self) -> &'static str {
        "discourse_events"
    }

    async fn connect_event_to_topic(
        &self,
        tx: &mut dyn StoreTransaction,
        topic: &Topic,
        event: &Event,
    ) -> Result<Option<TopicWithEvent>, AppError> {
        let event_id = event.id.to_string();

        // A topic carries at most one event.
        if let Some(existing) = tx.topic_custom_field(topic.id, EVENT_ID_FIELD).await? {
            if existing != event_id {
                debug!(
                    topic_id = topic.id,
                    existing_event_id = %existing,
                    event_id = event.id,
                    "Topic already carries a different event"
                );
                return Ok(None);
            }
        }

        tx.set_topic_custom_field(topic.id, EVENT_ID_FIELD, &event_id)
            .await?;
        tx.set_topic_custom_field(
            topic.id,
            EVENT_START_FIELD,
            &event.start_time.timestamp().to_string(),
        )
        .await?;
        if let Some(end_time) = event.end_time {
            tx.set_topic_custom_field(topic.id, EVENT_END_FIELD, &end_time.timestamp().to_string())
                .await?;
        }
        tx.set_topic_custom_field(topic.id, EVENT_NAME_FIELD, &event.name)
            .await?;

        Ok(Some(TopicWithEvent {
            topic: topic.clone(),
            event: event.clone(),
        }))
    }
}
