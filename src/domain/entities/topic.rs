use super::Event;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Forum topic. Owned by the host platform; only read here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Topic {
    pub id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub topic_id: i64,
    pub post_number: i64,
}

impl Post {
    pub fn is_first_post(&self) -> bool {
        self.post_number == 1
    }
}

/// Result of a successful sync: the topic now carrying the event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TopicWithEvent {
    pub topic: Topic,
    pub event: Event,
}
