use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Link between one event and one topic, established through one sync client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventConnection {
    pub id: i64,
    pub event_id: i64,
    pub topic_id: Option<i64>,
    pub client: String,
    pub created_at: DateTime<Utc>,
}
