use crate::application::ports::{EventRepository, TopicRepository, TransactionalStore};
use crate::application::syncers::SyncerRegistry;
use crate::domain::entities::TopicWithEvent;
use crate::shared::error::AppError;
use super::rollback_logged;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Links an event to a topic through a named sync client, atomically.
pub struct EventConnector {
    events: Arc<dyn EventRepository>,
    topics: Arc<dyn TopicRepository>,
    store: Arc<dyn TransactionalStore>,
    syncers: Arc<SyncerRegistry>,
    sync_timeout: Duration,
}

impl EventConnector {
    pub fn new(
        events: Arc<dyn EventRepository>,
        topics: Arc<dyn TopicRepository>,
        store: Arc<dyn TransactionalStore>,
        syncers: Arc<SyncerRegistry>,
        sync_timeout: Duration,
    ) -> Self {
        Self {
            events,
            topics,
            store,
            syncers,
            sync_timeout,
        }
    }

    pub async fn connect(
        &self,
        event_id: i64,
        topic_id: i64,
        client: &str,
    ) -> Result<TopicWithEvent, AppError> {
        let event = self
            .events
            .get_event(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("event_id {event_id}")))?;
        let topic = self
            .topics
            .get_topic(topic_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("topic_id {topic_id}")))?;
        let syncer = self
            .syncers
            .get(client)
            .ok_or_else(|| AppError::InvalidParameter("client".to_string()))?;

        let mut tx = self.store.begin().await?;

        let connection = match tx.insert_event_connection(event.id, topic.id, client).await {
            Ok(connection) => connection,
            Err(err) => {
                rollback_logged(tx).await;
                return Err(err);
            }
        };

        let synced = tokio::time::timeout(
            self.sync_timeout,
            syncer.connect_event_to_topic(tx.as_mut(), &topic, &event),
        )
        .await;

        match synced {
            Ok(Ok(Some(topic_with_event))) => {
                tx.commit().await?;
                info!(
                    event_id,
                    topic_id,
                    client,
                    connection_id = connection.id,
                    "Connected event to topic"
                );
                Ok(topic_with_event)
            }
            Ok(Ok(None)) => {
                rollback_logged(tx).await;
                warn!(event_id, topic_id, client, "Syncer refused the connection, rolled back");
                Err(AppError::SyncFailed(format!(
                    "{client} returned no result for event {event_id}"
                )))
            }
            Ok(Err(err)) => {
                rollback_logged(tx).await;
                warn!(event_id, topic_id, client, error = %err, "Syncer failed, rolled back");
                Err(err)
            }
            Err(_) => {
                rollback_logged(tx).await;
                warn!(
                    event_id,
                    topic_id,
                    client,
                    timeout_ms = self.sync_timeout.as_millis() as u64,
                    "Syncer timed out, rolled back"
                );
                Err(AppError::SyncFailed(format!("{client} timed out")))
            }
        }
    }
}
