use crate::domain::entities::{ConnectedTopic, Event, EventConnection, Post, Source, Topic};
use crate::shared::error::AppError;
use chrono::{DateTime, Utc};
use sqlx::{Row, sqlite::SqliteRow};

fn timestamp(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap_or_else(Utc::now)
}

pub(super) fn map_event_row(row: &SqliteRow) -> Result<Event, AppError> {
    let end_time: Option<i64> = row.try_get("end_time")?;

    Ok(Event {
        id: row.try_get("id")?,
        source_id: row.try_get("source_id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        url: row.try_get("url")?,
        start_time: timestamp(row.try_get("start_time")?),
        end_time: end_time.map(timestamp),
    })
}

pub(super) fn map_listing_source(row: &SqliteRow) -> Result<Option<Source>, AppError> {
    let source_id: Option<i64> = row.try_get("joined_source_id")?;
    let source_name: Option<String> = row.try_get("source_name")?;

    Ok(match (source_id, source_name) {
        (Some(id), Some(name)) => Some(Source { id, name }),
        _ => None,
    })
}

pub(super) fn map_connected_topic_row(row: &SqliteRow) -> Result<(i64, ConnectedTopic), AppError> {
    let event_id: i64 = row.try_get("event_id")?;
    let connected = ConnectedTopic {
        connection_id: row.try_get("id")?,
        topic_id: row.try_get("topic_id")?,
        topic_title: row.try_get("topic_title")?,
        client: row.try_get("client")?,
    };
    Ok((event_id, connected))
}

pub(super) fn map_connection_row(row: &SqliteRow) -> Result<EventConnection, AppError> {
    Ok(EventConnection {
        id: row.try_get("id")?,
        event_id: row.try_get("event_id")?,
        topic_id: row.try_get("topic_id")?,
        client: row.try_get("client")?,
        created_at: timestamp(row.try_get("created_at")?),
    })
}

pub(super) fn map_topic_row(row: &SqliteRow) -> Result<Topic, AppError> {
    Ok(Topic {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        created_at: timestamp(row.try_get("created_at")?),
    })
}

pub(super) fn map_post_row(row: &SqliteRow) -> Result<Post, AppError> {
    Ok(Post {
        id: row.try_get("id")?,
        topic_id: row.try_get("topic_id")?,
        post_number: row.try_get("post_number")?,
    })
}
