//! Fixtures shared by the in-crate tests.

use crate::application::ports::{StoreTransaction, TransactionalStore};
use crate::domain::entities::{Event, EventConnection, Post};
use crate::infrastructure::database::{ConnectionPool, SqliteRepository};
use crate::shared::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};
use std::sync::Arc;

pub(crate) async fn memory_repository() -> Arc<SqliteRepository> {
    let pool = ConnectionPool::from_memory()
        .await
        .expect("failed to create pool");
    let repo = SqliteRepository::new(pool);
    repo.initialize().await.expect("failed to migrate");
    Arc::new(repo)
}

pub(crate) async fn insert_source(pool: &SqlitePool, id: i64, name: &str) {
    sqlx::query("INSERT INTO sources (id, name) VALUES (?1, ?2)")
        .bind(id)
        .bind(name)
        .execute(pool)
        .await
        .expect("failed to insert source");
}

pub(crate) async fn insert_event(
    pool: &SqlitePool,
    id: i64,
    source_id: Option<i64>,
    name: &str,
    start_time_ms: i64,
) {
    sqlx::query(
        "INSERT INTO events (id, source_id, name, start_time, end_time, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?4)",
    )
    .bind(id)
    .bind(source_id)
    .bind(name)
    .bind(start_time_ms)
    .bind(start_time_ms + 3_600_000)
    .execute(pool)
    .await
    .expect("failed to insert event");
}

/// Inserts a live topic together with its first post.
pub(crate) async fn insert_topic(pool: &SqlitePool, id: i64, title: &str) {
    sqlx::query("INSERT INTO topics (id, title, created_at) VALUES (?1, ?2, 0)")
        .bind(id)
        .bind(title)
        .execute(pool)
        .await
        .expect("failed to insert topic");
    sqlx::query(
        "INSERT INTO posts (topic_id, post_number, raw, created_at) VALUES (?1, 1, 'first', 0)",
    )
    .bind(id)
    .execute(pool)
    .await
    .expect("failed to insert first post");
}

/// Inserts a live topic that has no posts at all.
pub(crate) async fn insert_empty_topic(pool: &SqlitePool, id: i64, title: &str) {
    sqlx::query("INSERT INTO topics (id, title, created_at) VALUES (?1, ?2, 0)")
        .bind(id)
        .bind(title)
        .execute(pool)
        .await
        .expect("failed to insert topic");
}

pub(crate) async fn insert_connection(
    pool: &SqlitePool,
    event_id: i64,
    topic_id: Option<i64>,
    client: &str,
) -> i64 {
    sqlx::query(
        "INSERT INTO event_connections (event_id, topic_id, client, created_at)
         VALUES (?1, ?2, ?3, 0)
         RETURNING id",
    )
    .bind(event_id)
    .bind(topic_id)
    .bind(client)
    .fetch_one(pool)
    .await
    .expect("failed to insert connection")
    .get("id")
}

pub(crate) async fn count_connections(pool: &SqlitePool, event_id: i64) -> i64 {
    sqlx::query("SELECT COUNT(*) AS count FROM event_connections WHERE event_id = ?1")
        .bind(event_id)
        .fetch_one(pool)
        .await
        .expect("failed to count connections")
        .get("count")
}

pub(crate) async fn event_exists(pool: &SqlitePool, id: i64) -> bool {
    let count: i64 = sqlx::query("SELECT COUNT(*) AS count FROM events WHERE id = ?1")
        .bind(id)
        .fetch_one(pool)
        .await
        .expect("failed to query event")
        .get("count");
    count > 0
}

pub(crate) async fn topic_is_trashed(pool: &SqlitePool, id: i64) -> bool {
    let deleted_at: Option<i64> = sqlx::query("SELECT deleted_at FROM topics WHERE id = ?1")
        .bind(id)
        .fetch_one(pool)
        .await
        .expect("failed to query topic")
        .get("deleted_at");
    deleted_at.is_some()
}

pub(crate) async fn topic_custom_field(pool: &SqlitePool, topic_id: i64, name: &str) -> Option<String> {
    sqlx::query("SELECT value FROM topic_custom_fields WHERE topic_id = ?1 AND name = ?2")
        .bind(topic_id)
        .bind(name)
        .fetch_optional(pool)
        .await
        .expect("failed to query custom field")
        .map(|row| row.get("value"))
}

pub(crate) async fn count_post_events(pool: &SqlitePool) -> i64 {
    sqlx::query("SELECT COUNT(*) AS count FROM post_events")
        .fetch_one(pool)
        .await
        .expect("failed to count post events")
        .get("count")
}

/// Store whose transactions refuse to roll back explicitly.
///
/// The inner transaction is dropped instead, which still discards its writes.
pub(crate) struct BrokenRollbackStore(pub(crate) Arc<SqliteRepository>);

struct BrokenRollbackTransaction(Box<dyn StoreTransaction>);

#[async_trait]
impl TransactionalStore for BrokenRollbackStore {
    async fn begin(&self) -> Result<Box<dyn StoreTransaction>, AppError> {
        Ok(Box::new(BrokenRollbackTransaction(self.0.begin().await?)))
    }
}

#[async_trait]
impl StoreTransaction for BrokenRollbackTransaction {
    async fn insert_event_connection(
        &mut self,
        event_id: i64,
        topic_id: i64,
        client: &str,
    ) -> Result<EventConnection, AppError> {
        self.0.insert_event_connection(event_id, topic_id, client).await
    }

    async fn find_events(&mut self, ids: &[i64]) -> Result<Vec<Event>, AppError> {
        self.0.find_events(ids).await
    }

    async fn event_connections_for(
        &mut self,
        event_ids: &[i64],
    ) -> Result<Vec<EventConnection>, AppError> {
        self.0.event_connections_for(event_ids).await
    }

    async fn delete_event_connections(&mut self, ids: &[i64]) -> Result<u64, AppError> {
        self.0.delete_event_connections(ids).await
    }

    async fn delete_event_connections_for_events(
        &mut self,
        event_ids: &[i64],
    ) -> Result<u64, AppError> {
        self.0.delete_event_connections_for_events(event_ids).await
    }

    async fn delete_events(&mut self, ids: &[i64]) -> Result<Vec<i64>, AppError> {
        self.0.delete_events(ids).await
    }

    async fn topic_custom_field(
        &mut self,
        topic_id: i64,
        name: &str,
    ) -> Result<Option<String>, AppError> {
        self.0.topic_custom_field(topic_id, name).await
    }

    async fn set_topic_custom_field(
        &mut self,
        topic_id: i64,
        name: &str,
        value: &str,
    ) -> Result<(), AppError> {
        self.0.set_topic_custom_field(topic_id, name, value).await
    }

    async fn first_post(&mut self, topic_id: i64) -> Result<Option<Post>, AppError> {
        self.0.first_post(topic_id).await
    }

    async fn post_event_exists(&mut self, post_id: i64) -> Result<bool, AppError> {
        self.0.post_event_exists(post_id).await
    }

    async fn insert_post_event(&mut self, post_id: i64, event: &Event) -> Result<(), AppError> {
        self.0.insert_post_event(post_id, event).await
    }

    async fn trash_post(&mut self, post_id: i64, at: DateTime<Utc>) -> Result<(), AppError> {
        self.0.trash_post(post_id, at).await
    }

    async fn trash_topic(&mut self, topic_id: i64, at: DateTime<Utc>) -> Result<(), AppError> {
        self.0.trash_topic(topic_id, at).await
    }

    async fn commit(self: Box<Self>) -> Result<(), AppError> {
        self.0.commit().await
    }

    async fn rollback(self: Box<Self>) -> Result<(), AppError> {
        drop(self.0);
        Err(AppError::Database("cannot rollback - no transaction is active".to_string()))
    }
}
