pub mod event_connector;
pub mod event_destroyer;
pub mod event_query_service;

pub use event_connector::EventConnector;
pub use event_destroyer::{DestroyOutcome, EventDestroyer};
pub use event_query_service::{EventPage, EventQueryParams, EventQueryService};

use crate::application::ports::StoreTransaction;
use tracing::warn;

/// Rolls back on a failure path. A rollback error is logged, not returned, so
/// the caller's own error reaches the client; the writes are discarded either way.
pub(crate) async fn rollback_logged(tx: Box<dyn StoreTransaction>) {
    if let Err(err) = tx.rollback().await {
        warn!(error = %err, "Rollback failed");
    }
}
