use crate::application::ports::{PostDestroyer, StoreTransaction};
use crate::shared::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, warn};

/// Trashes a topic's first post, which trashes the topic with it.
#[derive(Debug, Default)]
pub struct ForumPostDestroyer;

impl ForumPostDestroyer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PostDestroyer for ForumPostDestroyer {
    async fn destroy_first_post(
        &self,
        tx: &mut dyn StoreTransaction,
        topic_id: i64,
    ) -> Result<bool, AppError> {
        let Some(post) = tx.first_post(topic_id).await? else {
            warn!(topic_id, "No live first post to destroy");
            return Ok(false);
        };

        let now = Utc::now();
        tx.trash_post(post.id, now).await?;
        if post.is_first_post() {
            tx.trash_topic(topic_id, now).await?;
        }

        debug!(topic_id, post_id = post.id, "Destroyed first post");
        Ok(true)
    }
}
