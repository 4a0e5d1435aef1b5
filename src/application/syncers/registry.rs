use super::{DiscourseEventsSyncer, PostEventSyncer};
use crate::application::ports::Syncer;
use crate::domain::constants::AVAILABLE_CLIENTS;
use crate::shared::error::AppError;
use std::collections::HashMap;
use std::sync::Arc;

/// Client name to syncer mapping, fixed at construction.
#[derive(Clone)]
pub struct SyncerRegistry {
    syncers: HashMap<&'static str, Arc<dyn Syncer>>,
}

impl std::fmt::Debug for SyncerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncerRegistry")
            .field("clients", &self.clients())
            .finish()
    }
}

impl SyncerRegistry {
    /// Builds a registry whose keys are exactly `allowed`.
    ///
    /// Fails when a syncer is registered twice, registered outside the
    /// allow-list, or when an allowed client has no syncer.
    pub fn new(allowed: &[&str], syncers: Vec<Arc<dyn Syncer>>) -> Result<Self, AppError> {
        let mut map: HashMap<&'static str, Arc<dyn Syncer>> = HashMap::with_capacity(syncers.len());

        for syncer in syncers {
            let client = syncer.client();
            if !allowed.contains(&client) {
                return Err(AppError::ConfigurationError(format!(
                    "Syncer registered for unknown client '{client}'"
                )));
            }
            if map.insert(client, syncer).is_some() {
                return Err(AppError::ConfigurationError(format!(
                    "Duplicate syncer for client '{client}'"
                )));
            }
        }

        if let Some(missing) = allowed.iter().find(|client| !map.contains_key(**client)) {
            return Err(AppError::ConfigurationError(format!(
                "No syncer registered for client '{missing}'"
            )));
        }

        Ok(Self { syncers: map })
    }

    /// The shipped syncers, keyed by [`AVAILABLE_CLIENTS`].
    pub fn standard() -> Result<Self, AppError> {
        Self::new(
            AVAILABLE_CLIENTS,
            vec![
                Arc::new(DiscourseEventsSyncer::new()),
                Arc::new(PostEventSyncer::new()),
            ],
        )
    }

    pub fn get(&self, client: &str) -> Option<Arc<dyn Syncer>> {
        self.syncers.get(client).cloned()
    }

    pub fn clients(&self) -> Vec<&'static str> {
        let mut clients: Vec<&'static str> = self.syncers.keys().copied().collect();
        clients.sort_unstable();
        clients
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::StoreTransaction;
    use crate::domain::entities::{Event, Topic, TopicWithEvent};
    use async_trait::async_trait;

    struct NamedSyncer(&'static str);

    #[async_trait]
    impl Syncer for NamedSyncer {
        fn client(&self) -> &'static str {
            self.0
        }

        async fn connect_event_to_topic(
            &self,
            _tx: &mut dyn StoreTransaction,
            _topic: &Topic,
            _event: &Event,
        ) -> Result<Option<TopicWithEvent>, AppError> {
            Ok(None)
        }
    }

    #[test]
    fn standard_registry_covers_available_clients() {
        let registry = SyncerRegistry::standard().expect("standard registry");
        assert_eq!(registry.clients(), vec!["discourse_events", "events"]);
        for client in AVAILABLE_CLIENTS {
            assert!(registry.get(client).is_some());
        }
        assert!(registry.get("unknown-client").is_none());
    }

    #[test]
    fn rejects_missing_syncer() {
        let err = SyncerRegistry::new(&["a", "b"], vec![Arc::new(NamedSyncer("a"))])
            .expect_err("missing b");
        assert!(matches!(err, AppError::ConfigurationError(_)));
    }

    #[test]
    fn rejects_unlisted_syncer() {
        let err = SyncerRegistry::new(
            &["a"],
            vec![Arc::new(NamedSyncer("a")), Arc::new(NamedSyncer("rogue"))],
        )
        .expect_err("rogue is not allowed");
        assert!(matches!(err, AppError::ConfigurationError(_)));
    }

    #[test]
    fn rejects_duplicate_syncer() {
        let err = SyncerRegistry::new(
            &["a"],
            vec![Arc::new(NamedSyncer("a")), Arc::new(NamedSyncer("a"))],
        )
        .expect_err("duplicate");
        assert!(matches!(err, AppError::ConfigurationError(_)));
    }
}
