use super::SqliteRepository;
use super::mapper::map_topic_row;
use super::queries::SELECT_LIVE_TOPIC_BY_ID;
use crate::application::ports::TopicRepository;
use crate::domain::entities::Topic;
use crate::shared::error::AppError;
use async_trait::async_trait;

#[async_trait]
impl TopicRepository for SqliteRepository {
    async fn get_topic(&self, id: i64) -> Result<Option<Topic>, AppError> {
        let row = sqlx::query(SELECT_LIVE_TOPIC_BY_ID)
            .bind(id)
            .fetch_optional(self.pool.get_pool())
            .await?;

        match row {
            Some(row) => Ok(Some(map_topic_row(&row)?)),
            None => Ok(None),
        }
    }
}
