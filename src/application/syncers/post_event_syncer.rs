use crate::application::ports::{StoreTransaction, Syncer};
use crate::domain::entities::{Event, Topic, TopicWithEvent};
use crate::shared::error::AppError;
use async_trait::async_trait;
use tracing::debug;

/// Attaches the event to the topic's first post.
#[derive(Debug, Default)]
pub struct PostEventSyncer;

impl PostEventSyncer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Syncer for PostEventSyncer {
    fn client(&self) -> &'static str {
        "events"
    }

    async fn connect_event_to_topic(
        &self,
        tx: &mut dyn StoreTransaction,
        topic: &Topic,
        event: &Event,
    ) -> Result<Option<TopicWithEvent>, AppError> {
        let Some(post) = tx.first_post(topic.id).await? else {
            debug!(topic_id = topic.id, "Topic has no first post to attach an event to");
            return Ok(None);
        };

        if tx.post_event_exists(post.id).await? {
            debug!(post_id = post.id, "First post already has an event");
            return Ok(None);
        }

        tx.insert_post_event(post.id, event).await?;

        Ok(Some(TopicWithEvent {
            topic: topic.clone(),
            event: event.clone(),
        }))
    }
}
