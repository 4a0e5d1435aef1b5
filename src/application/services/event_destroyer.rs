use crate::application::ports::{PostDestroyer, StoreTransaction, TransactionalStore};
use crate::domain::entities::EventConnection;
use crate::domain::value_objects::DestroyTarget;
use crate::shared::error::AppError;
use super::rollback_logged;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DestroyOutcome {
    pub destroyed_event_ids: Vec<i64>,
    pub destroyed_topics_event_ids: Vec<i64>,
}

impl DestroyOutcome {
    pub fn is_empty(&self) -> bool {
        self.destroyed_event_ids.is_empty() && self.destroyed_topics_event_ids.is_empty()
    }
}

/// Deletes events, their topics, or both, in one transaction.
pub struct EventDestroyer {
    store: Arc<dyn TransactionalStore>,
    post_destroyer: Arc<dyn PostDestroyer>,
}

impl EventDestroyer {
    pub fn new(store: Arc<dyn TransactionalStore>, post_destroyer: Arc<dyn PostDestroyer>) -> Self {
        Self {
            store,
            post_destroyer,
        }
    }

    /// Fails with [`AppError::EmptyEffect`] when nothing was destroyed.
    pub async fn destroy(
        &self,
        event_ids: &[i64],
        target: DestroyTarget,
    ) -> Result<DestroyOutcome, AppError> {
        let mut ids = event_ids.to_vec();
        ids.sort_unstable();
        ids.dedup();

        let mut tx = self.store.begin().await?;

        let result = self.destroy_within(tx.as_mut(), &ids, target).await;

        match result {
            Ok(outcome) if outcome.is_empty() => {
                rollback_logged(tx).await;
                warn!(requested = ids.len(), %target, "Destroy matched nothing");
                Err(AppError::EmptyEffect)
            }
            Ok(outcome) => {
                tx.commit().await?;
                info!(
                    %target,
                    events = outcome.destroyed_event_ids.len(),
                    topic_events = outcome.destroyed_topics_event_ids.len(),
                    "Destroyed events"
                );
                Ok(outcome)
            }
            Err(err) => {
                rollback_logged(tx).await;
                warn!(%target, error = %err, "Destroy failed, rolled back");
                Err(err)
            }
        }
    }

    async fn destroy_within(
        &self,
        tx: &mut dyn StoreTransaction,
        ids: &[i64],
        target: DestroyTarget,
    ) -> Result<DestroyOutcome, AppError> {
        let mut outcome = DestroyOutcome::default();
        if ids.is_empty() {
            return Ok(outcome);
        }

        let event_ids: Vec<i64> = tx.find_events(ids).await?.iter().map(|e| e.id).collect();

        if target.destroys_topics() {
            outcome.destroyed_topics_event_ids = self.destroy_topics(tx, &event_ids).await?;
        }

        if target.destroys_events() {
            // Connections first; the schema has no cascade.
            tx.delete_event_connections_for_events(&event_ids).await?;
            outcome.destroyed_event_ids = tx.delete_events(&event_ids).await?;
        }

        Ok(outcome)
    }

    /// Destroys every connected topic of `event_ids`, then removes the touched
    /// connections in one statement. Returns the ids of the events processed.
    async fn destroy_topics(
        &self,
        tx: &mut dyn StoreTransaction,
        event_ids: &[i64],
    ) -> Result<Vec<i64>, AppError> {
        let mut by_event: BTreeMap<i64, Vec<EventConnection>> = BTreeMap::new();
        for connection in tx.event_connections_for(event_ids).await? {
            by_event.entry(connection.event_id).or_default().push(connection);
        }

        let mut touched: BTreeSet<i64> = BTreeSet::new();
        let mut processed = Vec::with_capacity(event_ids.len());

        for event_id in event_ids {
            for connection in by_event.get(event_id).into_iter().flatten() {
                if let Some(topic_id) = connection.topic_id {
                    self.post_destroyer
                        .destroy_first_post(&mut *tx, topic_id)
                        .await?;
                }
                touched.insert(connection.id);
            }
            processed.push(*event_id);
        }

        let touched: Vec<i64> = touched.into_iter().collect();
        tx.delete_event_connections(&touched).await?;

        Ok(processed)
    }
}
