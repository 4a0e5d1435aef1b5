use super::Source;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    pub id: i64,
    pub source_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
}

/// A connection as shown next to an event in the admin listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectedTopic {
    pub connection_id: i64,
    pub topic_id: Option<i64>,
    /// `None` when the topic is gone or trashed.
    pub topic_title: Option<String>,
    pub client: String,
}

/// An event together with its source and connections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventListing {
    pub event: Event,
    pub source: Option<Source>,
    pub connections: Vec<ConnectedTopic>,
}

impl EventListing {
    pub fn new(event: Event, source: Option<Source>) -> Self {
        Self {
            event,
            source,
            connections: Vec::new(),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connections.iter().any(|c| c.topic_id.is_some())
    }
}
