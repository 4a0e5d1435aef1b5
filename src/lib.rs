//! Administration of links between feed events and forum topics.
//!
//! Three operations are exposed through [`presentation::commands`]: a filtered,
//! paginated listing; connecting an event to a topic through a named syncer;
//! and destroying events, their topics, or both. Connect and destroy each run in
//! a single store transaction.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod shared;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;

pub use application::services::{
    DestroyOutcome, EventConnector, EventDestroyer, EventPage, EventQueryParams,
    EventQueryService,
};
pub use application::syncers::SyncerRegistry;
pub use domain::{DestroyTarget, EventFilter, EventOrder, SortDirection};
pub use infrastructure::database::{ConnectionPool, SqliteRepository};
pub use presentation::dto::ApiResponse;
pub use shared::{AppConfig, AppError};
pub use state::AppState;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `default_filter` when set.
pub fn init_logging(default_filter: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
