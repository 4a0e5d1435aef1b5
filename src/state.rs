use crate::application::ports::PostDestroyer;
use crate::application::services::{EventConnector, EventDestroyer, EventQueryService};
use crate::application::syncers::SyncerRegistry;
use crate::infrastructure::database::{ConnectionPool, SqliteRepository};
use crate::infrastructure::forum::ForumPostDestroyer;
use crate::presentation::handlers::EventHandler;
use crate::shared::{AppConfig, AppError};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Everything an administrative request needs, wired once at startup.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<SqliteRepository>,
    pub syncers: Arc<SyncerRegistry>,
    pub query_service: Arc<EventQueryService>,
    pub connector: Arc<EventConnector>,
    pub destroyer: Arc<EventDestroyer>,
    pub event_handler: Arc<EventHandler>,
}

impl AppState {
    pub async fn new(config: &AppConfig) -> Result<Self, AppError> {
        config.validate().map_err(AppError::ConfigurationError)?;

        if let Some(parent) = sqlite_file_path(&config.database.url)
            .as_deref()
            .and_then(Path::parent)
        {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    AppError::ConfigurationError(format!(
                        "Failed to create {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }

        let pool = ConnectionPool::from_config(&config.database).await?;
        Self::from_pool(pool, config).await
    }

    /// Wires the standard syncers and post destroyer over an existing pool.
    pub async fn from_pool(pool: ConnectionPool, config: &AppConfig) -> Result<Self, AppError> {
        let repository = Arc::new(SqliteRepository::new(pool));
        repository.initialize().await?;

        let syncers = SyncerRegistry::standard()?;
        info!(clients = ?syncers.clients(), "Syncer registry ready");

        Ok(Self::with_parts(
            repository,
            syncers,
            Arc::new(ForumPostDestroyer::new()),
            config.sync.timeout(),
        ))
    }

    pub fn with_parts(
        repository: Arc<SqliteRepository>,
        syncers: SyncerRegistry,
        post_destroyer: Arc<dyn PostDestroyer>,
        sync_timeout: Duration,
    ) -> Self {
        let syncers = Arc::new(syncers);
        let query_service = Arc::new(EventQueryService::new(repository.clone()));
        let connector = Arc::new(EventConnector::new(
            repository.clone(),
            repository.clone(),
            repository.clone(),
            syncers.clone(),
            sync_timeout,
        ));
        let destroyer = Arc::new(EventDestroyer::new(repository.clone(), post_destroyer));
        let event_handler = Arc::new(EventHandler::new(
            query_service.clone(),
            connector.clone(),
            destroyer.clone(),
        ));

        Self {
            repository,
            syncers,
            query_service,
            connector,
            destroyer,
            event_handler,
        }
    }
}

/// File path behind a `sqlite:` url, if it names a file at all.
fn sqlite_file_path(url: &str) -> Option<PathBuf> {
    let rest = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(PathBuf::from(path))
}
