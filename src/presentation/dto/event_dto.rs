use super::Validate;
use crate::application::services::{DestroyOutcome, EventPage, EventQueryParams};
use crate::domain::entities::{ConnectedTopic, EventListing, Source};
use crate::domain::value_objects::{DestroyTarget, EventFilter, EventOrder, SortDirection};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A flag that may arrive as a JSON bool, a number, or a string.
///
/// Anything else lands in `Other` and reads as false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BooleanLike {
    Bool(bool),
    Number(i64),
    Text(String),
    Other(Value),
}

impl BooleanLike {
    pub fn direction(&self) -> SortDirection {
        match self {
            BooleanLike::Bool(true) => SortDirection::Asc,
            BooleanLike::Number(value) if *value != 0 => SortDirection::Asc,
            BooleanLike::Text(value) => SortDirection::from_flag(Some(value)),
            _ => SortDirection::Desc,
        }
    }
}

/// Strings pass through; any other JSON type is treated as absent.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(value)) => Some(value),
        _ => None,
    })
}

/// Integers pass through, floats truncate, and strings are parsed with a
/// fallback of page 0.
fn lenient_page<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(number)) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|value| value as i64)),
        Some(Value::String(value)) => Some(value.trim().parse().unwrap_or(0)),
        _ => None,
    })
}

// Requests

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListEventsRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub filter: Option<String>,
    #[serde(default, deserialize_with = "lenient_page")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub order: Option<String>,
    #[serde(default)]
    pub asc: Option<BooleanLike>,
}

impl ListEventsRequest {
    /// Lenient: unknown filter, order or flag values fall back to defaults.
    pub fn to_params(&self) -> EventQueryParams {
        let direction = self
            .asc
            .as_ref()
            .map(BooleanLike::direction)
            .unwrap_or_default();

        EventQueryParams {
            filter: EventFilter::parse(self.filter.as_deref()),
            page: self.page.unwrap_or(0),
            order: EventOrder::parse(self.order.as_deref()),
            direction,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectEventRequest {
    pub event_id: i64,
    pub topic_id: i64,
    pub client: String,
}

impl Validate for ConnectEventRequest {
    fn validate(&self) -> Result<(), String> {
        if self.client.trim().is_empty() {
            return Err("client is required".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestroyEventsRequest {
    #[serde(default)]
    pub event_ids: Vec<i64>,
    pub target: DestroyTarget,
}

// Responses

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceView {
    pub id: i64,
    pub name: String,
}

impl From<Source> for SourceView {
    fn from(source: Source) -> Self {
        Self {
            id: source.id,
            name: source.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventTopicView {
    pub connection_id: i64,
    pub topic_id: Option<i64>,
    pub title: Option<String>,
    pub client: String,
}

impl From<ConnectedTopic> for EventTopicView {
    fn from(connected: ConnectedTopic) -> Self {
        Self {
            connection_id: connected.connection_id,
            topic_id: connected.topic_id,
            title: connected.topic_title,
            client: connected.client,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventView {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub source_id: Option<i64>,
    pub source: Option<SourceView>,
    pub topics: Vec<EventTopicView>,
}

impl From<EventListing> for EventView {
    fn from(listing: EventListing) -> Self {
        let EventListing {
            event,
            source,
            connections,
        } = listing;

        Self {
            id: event.id,
            name: event.name,
            description: event.description,
            url: event.url,
            start_time: event.start_time,
            end_time: event.end_time,
            source_id: event.source_id,
            source: source.map(SourceView::from),
            topics: connections.into_iter().map(EventTopicView::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListEventsResponse {
    pub page: i64,
    pub filter: Option<EventFilter>,
    pub order: EventOrder,
    pub asc: bool,
    pub with_topics_count: u64,
    pub without_topics_count: u64,
    pub events: Vec<EventView>,
}

impl From<EventPage> for ListEventsResponse {
    fn from(page: EventPage) -> Self {
        Self {
            page: page.page,
            filter: page.filter,
            order: page.order,
            asc: page.direction.is_ascending(),
            with_topics_count: page.with_topics_count,
            without_topics_count: page.without_topics_count,
            events: page.events.into_iter().map(EventView::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestroyEventsResponse {
    pub destroyed_event_ids: Vec<i64>,
    pub destroyed_topics_event_ids: Vec<i64>,
}

impl From<DestroyOutcome> for DestroyEventsResponse {
    fn from(outcome: DestroyOutcome) -> Self {
        Self {
            destroyed_event_ids: outcome.destroyed_event_ids,
            destroyed_topics_event_ids: outcome.destroyed_topics_event_ids,
        }
    }
}
