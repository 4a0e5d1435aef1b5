#![allow(dead_code)]

use async_trait::async_trait;
use events_admin::application::ports::{StoreTransaction, Syncer};
use events_admin::domain::entities::{Event, Topic, TopicWithEvent};
use events_admin::infrastructure::forum::ForumPostDestroyer;
use events_admin::{AppConfig, AppError, AppState, ConnectionPool, SqliteRepository, SyncerRegistry};
use sqlx::{Row, SqlitePool};
use std::sync::Arc;
use std::time::Duration;

/// Sync client whose answer is decided by the test.
pub struct FixedSyncer {
    pub client: &'static str,
    pub succeed: bool,
}

#[async_trait]
impl Syncer for FixedSyncer {
    fn client(&self) -> &'static str {
        self.client
    }

    async fn connect_event_to_topic(
        &self,
        _tx: &mut dyn StoreTransaction,
        topic: &Topic,
        event: &Event,
    ) -> Result<Option<TopicWithEvent>, AppError> {
        if !self.succeed {
            return Ok(None);
        }
        Ok(Some(TopicWithEvent {
            topic: topic.clone(),
            event: event.clone(),
        }))
    }
}

/// State over a private in-memory database with the standard syncers.
pub async fn memory_state() -> AppState {
    let pool = ConnectionPool::from_memory()
        .await
        .expect("failed to create pool");
    AppState::from_pool(pool, &AppConfig::default())
        .await
        .expect("failed to build state")
}

/// State over a private in-memory database with caller-provided syncers.
pub async fn memory_state_with(syncers: SyncerRegistry) -> AppState {
    let pool = ConnectionPool::from_memory()
        .await
        .expect("failed to create pool");
    let repository = SqliteRepository::new(pool);
    repository.initialize().await.expect("failed to migrate");
    AppState::with_parts(
        Arc::new(repository),
        syncers,
        Arc::new(ForumPostDestroyer::new()),
        Duration::from_secs(5),
    )
}

pub fn db(state: &AppState) -> &SqlitePool {
    state.repository.pool().get_pool()
}

pub async fn seed_event(pool: &SqlitePool, id: i64, name: &str, start_time_ms: i64) {
    sqlx::query(
        "INSERT INTO events (id, name, start_time, created_at) VALUES (?1, ?2, ?3, ?3)",
    )
    .bind(id)
    .bind(name)
    .bind(start_time_ms)
    .execute(pool)
    .await
    .expect("failed to insert event");
}

pub async fn seed_topic(pool: &SqlitePool, id: i64, title: &str) {
    sqlx::query("INSERT INTO topics (id, title, created_at) VALUES (?1, ?2, 0)")
        .bind(id)
        .bind(title)
        .execute(pool)
        .await
        .expect("failed to insert topic");
    sqlx::query("INSERT INTO posts (topic_id, post_number, created_at) VALUES (?1, 1, 0)")
        .bind(id)
        .execute(pool)
        .await
        .expect("failed to insert first post");
}

pub async fn seed_connection(
    pool: &SqlitePool,
    event_id: i64,
    topic_id: Option<i64>,
    client: &str,
) {
    sqlx::query(
        "INSERT INTO event_connections (event_id, topic_id, client, created_at)
         VALUES (?1, ?2, ?3, 0)",
    )
    .bind(event_id)
    .bind(topic_id)
    .bind(client)
    .execute(pool)
    .await
    .expect("failed to insert connection");
}

pub async fn connections_of(pool: &SqlitePool, event_id: i64) -> Vec<(Option<i64>, String)> {
    sqlx::query("SELECT topic_id, client FROM event_connections WHERE event_id = ?1 ORDER BY id")
        .bind(event_id)
        .fetch_all(pool)
        .await
        .expect("failed to query connections")
        .into_iter()
        .map(|row| (row.get("topic_id"), row.get("client")))
        .collect()
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query(&format!("SELECT COUNT(*) AS count FROM {table}"))
        .fetch_one(pool)
        .await
        .expect("failed to count rows")
        .get("count")
}

pub async fn topic_deleted(pool: &SqlitePool, id: i64) -> bool {
    let deleted_at: Option<i64> = sqlx::query("SELECT deleted_at FROM topics WHERE id = ?1")
        .bind(id)
        .fetch_one(pool)
        .await
        .expect("failed to query topic")
        .get("deleted_at");
    deleted_at.is_some()
}
