use super::mapper::{map_connection_row, map_event_row, map_post_row};
use super::push_id_list;
use super::queries::{
    DELETE_CONNECTIONS_BY_EVENT_IDS, DELETE_CONNECTIONS_BY_IDS, DELETE_EVENTS_BY_IDS,
    INSERT_EVENT_CONNECTION, INSERT_POST_EVENT, SELECT_CONNECTIONS_BY_EVENT_IDS,
    SELECT_EVENTS_BY_IDS, SELECT_FIRST_POST, SELECT_POST_EVENT_EXISTS, SELECT_TOPIC_CUSTOM_FIELD,
    TRASH_POST, TRASH_TOPIC, TRASH_TOPIC_POSTS, UPSERT_TOPIC_CUSTOM_FIELD,
};
use crate::application::ports::StoreTransaction;
use crate::domain::entities::{Event, EventConnection, Post};
use crate::shared::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{QueryBuilder, Row, Sqlite, Transaction};

/// A unit of work over one pooled SQLite connection.
pub struct SqliteTransaction {
    tx: Transaction<'static, Sqlite>,
}

impl SqliteTransaction {
    pub fn new(tx: Transaction<'static, Sqlite>) -> Self {
        Self { tx }
    }

    async fn delete_by_ids(&mut self, head: &'static str, ids: &[i64]) -> Result<u64, AppError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let mut builder = QueryBuilder::<Sqlite>::new(head);
        push_id_list(&mut builder, ids);
        let result = builder.build().execute(&mut *self.tx).await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl StoreTransaction for SqliteTransaction {
    async fn insert_event_connection(
        &mut self,
        event_id: i64,
        topic_id: i64,
        client: &str,
    ) -> Result<EventConnection, AppError> {
        let row = sqlx::query(INSERT_EVENT_CONNECTION)
            .bind(event_id)
            .bind(topic_id)
            .bind(client)
            .bind(Utc::now().timestamp_millis())
            .fetch_one(&mut *self.tx)
            .await?;

        map_connection_row(&row)
    }

    async fn find_events(&mut self, ids: &[i64]) -> Result<Vec<Event>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder = QueryBuilder::<Sqlite>::new(SELECT_EVENTS_BY_IDS);
        push_id_list(&mut builder, ids);
        builder.push(" ORDER BY id ASC");

        let rows = builder.build().fetch_all(&mut *self.tx).await?;
        rows.iter().map(map_event_row).collect()
    }

    async fn event_connections_for(
        &mut self,
        event_ids: &[i64],
    ) -> Result<Vec<EventConnection>, AppError> {
        if event_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder = QueryBuilder::<Sqlite>::new(SELECT_CONNECTIONS_BY_EVENT_IDS);
        push_id_list(&mut builder, event_ids);
        builder.push(" ORDER BY event_id ASC, id ASC");

        let rows = builder.build().fetch_all(&mut *self.tx).await?;
        rows.iter().map(map_connection_row).collect()
    }

    async fn delete_event_connections(&mut self, ids: &[i64]) -> Result<u64, AppError> {
        self.delete_by_ids(DELETE_CONNECTIONS_BY_IDS, ids).await
    }

    async fn delete_event_connections_for_events(
        &mut self,
        event_ids: &[i64],
    ) -> Result<u64, AppError> {
        self.delete_by_ids(DELETE_CONNECTIONS_BY_EVENT_IDS, event_ids)
            .await
    }

    async fn delete_events(&mut self, ids: &[i64]) -> Result<Vec<i64>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder = QueryBuilder::<Sqlite>::new(DELETE_EVENTS_BY_IDS);
        push_id_list(&mut builder, ids);
        builder.push(" RETURNING id");

        let rows = builder.build().fetch_all(&mut *self.tx).await?;
        let mut deleted = rows
            .iter()
            .map(|row| row.try_get::<i64, _>("id"))
            .collect::<Result<Vec<_>, _>>()?;
        deleted.sort_unstable();
        Ok(deleted)
    }

    async fn topic_custom_field(
        &mut self,
        topic_id: i64,
        name: &str,
    ) -> Result<Option<String>, AppError> {
        let row = sqlx::query(SELECT_TOPIC_CUSTOM_FIELD)
            .bind(topic_id)
            .bind(name)
            .fetch_optional(&mut *self.tx)
            .await?;

        match row {
            Some(row) => Ok(Some(row.try_get("value")?)),
            None => Ok(None),
        }
    }

    async fn set_topic_custom_field(
        &mut self,
        topic_id: i64,
        name: &str,
        value: &str,
    ) -> Result<(), AppError> {
        sqlx::query(UPSERT_TOPIC_CUSTOM_FIELD)
            .bind(topic_id)
            .bind(name)
            .bind(value)
            .execute(&mut *self.tx)
            .await?;
        Ok(())
    }

    async fn first_post(&mut self, topic_id: i64) -> Result<Option<Post>, AppError> {
        let row = sqlx::query(SELECT_FIRST_POST)
            .bind(topic_id)
            .fetch_optional(&mut *self.tx)
            .await?;

        match row {
            Some(row) => Ok(Some(map_post_row(&row)?)),
            None => Ok(None),
        }
    }

    async fn post_event_exists(&mut self, post_id: i64) -> Result<bool, AppError> {
        let present: i64 = sqlx::query(SELECT_POST_EVENT_EXISTS)
            .bind(post_id)
            .fetch_one(&mut *self.tx)
            .await?
            .try_get("present")?;
        Ok(present != 0)
    }

    async fn insert_post_event(&mut self, post_id: i64, event: &Event) -> Result<(), AppError> {
        sqlx::query(INSERT_POST_EVENT)
            .bind(post_id)
            .bind(event.id)
            .bind(&event.name)
            .bind(event.start_time.timestamp_millis())
            .bind(event.end_time.map(|t| t.timestamp_millis()))
            .execute(&mut *self.tx)
            .await?;
        Ok(())
    }

    async fn trash_post(&mut self, post_id: i64, at: DateTime<Utc>) -> Result<(), AppError> {
        sqlx::query(TRASH_POST)
            .bind(post_id)
            .bind(at.timestamp_millis())
            .execute(&mut *self.tx)
            .await?;
        Ok(())
    }

    async fn trash_topic(&mut self, topic_id: i64, at: DateTime<Utc>) -> Result<(), AppError> {
        let at = at.timestamp_millis();
        sqlx::query(TRASH_TOPIC_POSTS)
            .bind(topic_id)
            .bind(at)
            .execute(&mut *self.tx)
            .await?;
        sqlx::query(TRASH_TOPIC)
            .bind(topic_id)
            .bind(at)
            .execute(&mut *self.tx)
            .await?;
        Ok(())
    }

    async fn commit(self: Box<Self>) -> Result<(), AppError> {
        let Self { tx } = *self;
        tx.commit().await?;
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), AppError> {
        let Self { tx } = *self;
        tx.rollback().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::application::ports::TransactionalStore;
    use crate::test_support::{
        count_connections, insert_connection, insert_event, insert_topic, memory_repository,
    };

    #[tokio::test]
    async fn rollback_discards_inserted_connection() {
        let repo = memory_repository().await;
        let pool = repo.pool().get_pool();
        insert_event(pool, 5, None, "e", 1_000).await;
        insert_topic(pool, 10, "t").await;

        let mut tx = repo.begin().await.unwrap();
        let connection = tx.insert_event_connection(5, 10, "events").await.unwrap();
        assert_eq!(connection.event_id, 5);
        assert_eq!(connection.topic_id, Some(10));
        tx.rollback().await.unwrap();

        assert_eq!(count_connections(pool, 5).await, 0);
    }

    #[tokio::test]
    async fn dropped_transaction_discards_writes() {
        let repo = memory_repository().await;
        let pool = repo.pool().get_pool();
        insert_event(pool, 5, None, "e", 1_000).await;
        insert_topic(pool, 10, "t").await;

        {
            let mut tx = repo.begin().await.unwrap();
            tx.insert_event_connection(5, 10, "events").await.unwrap();
        }

        assert_eq!(count_connections(pool, 5).await, 0);
    }

    #[tokio::test]
    async fn delete_events_reports_only_existing_ids() {
        let repo = memory_repository().await;
        let pool = repo.pool().get_pool();
        insert_event(pool, 1, None, "a", 1_000).await;
        insert_event(pool, 2, None, "b", 2_000).await;

        let mut tx = repo.begin().await.unwrap();
        let found = tx.find_events(&[2, 1, 99]).await.unwrap();
        assert_eq!(found.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1, 2]);
        let deleted = tx.delete_events(&[2, 99]).await.unwrap();
        tx.commit().await.unwrap();

        assert_eq!(deleted, vec![2]);
    }

    #[tokio::test]
    async fn deleting_event_with_connections_requires_explicit_cascade() {
        let repo = memory_repository().await;
        let pool = repo.pool().get_pool();
        insert_event(pool, 1, None, "a", 1_000).await;
        insert_topic(pool, 10, "t").await;
        insert_connection(pool, 1, Some(10), "events").await;

        let mut tx = repo.begin().await.unwrap();
        assert!(tx.delete_events(&[1]).await.is_err());
        tx.rollback().await.unwrap();

        let mut tx = repo.begin().await.unwrap();
        assert_eq!(tx.delete_event_connections_for_events(&[1]).await.unwrap(), 1);
        assert_eq!(tx.delete_events(&[1]).await.unwrap(), vec![1]);
        tx.commit().await.unwrap();

        assert_eq!(count_connections(pool, 1).await, 0);
    }

    #[tokio::test]
    async fn trash_topic_hides_first_post() {
        let repo = memory_repository().await;
        let pool = repo.pool().get_pool();
        insert_topic(pool, 10, "t").await;

        let mut tx = repo.begin().await.unwrap();
        let post = tx.first_post(10).await.unwrap().expect("first post");
        assert!(post.is_first_post());
        tx.trash_topic(10, chrono::Utc::now()).await.unwrap();
        assert!(tx.first_post(10).await.unwrap().is_none());
        tx.commit().await.unwrap();
    }
}
