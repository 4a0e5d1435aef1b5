pub(super) const SELECT_EVENT_BY_ID: &str = r#"
    SELECT id, source_id, name, description, url, start_time, end_time
    FROM events
    WHERE id = ?1
"#;

/// Listing head; filter, order and paging are appended by the query builder.
pub(super) const SELECT_EVENT_LISTING: &str = r#"
    SELECT
        e.id,
        e.source_id,
        e.name,
        e.description,
        e.url,
        e.start_time,
        e.end_time,
        s.id AS joined_source_id,
        s.name AS source_name
    FROM events e
    LEFT JOIN sources s ON s.id = e.source_id
"#;

pub(super) const CONNECTED_CLAUSE: &str = r#"
    EXISTS (
        SELECT 1
        FROM event_connections ec
        WHERE ec.event_id = e.id
          AND ec.topic_id IS NOT NULL
    )
"#;

pub(super) const COUNT_EVENTS: &str = "SELECT COUNT(*) AS count FROM events e";

/// Connections of a set of events with live topic titles; the id list is appended.
pub(super) const SELECT_LISTING_CONNECTIONS: &str = r#"
    SELECT
        ec.id,
        ec.event_id,
        ec.topic_id,
        ec.client,
        t.title AS topic_title
    FROM event_connections ec
    LEFT JOIN topics t ON t.id = ec.topic_id AND t.deleted_at IS NULL
    WHERE ec.event_id IN (
"#;

pub(super) const SELECT_LIVE_TOPIC_BY_ID: &str = r#"
    SELECT id, title, created_at
    FROM topics
    WHERE id = ?1
      AND deleted_at IS NULL
"#;

pub(super) const INSERT_EVENT_CONNECTION: &str = r#"
    INSERT INTO event_connections (event_id, topic_id, client, created_at)
    VALUES (?1, ?2, ?3, ?4)
    RETURNING id, event_id, topic_id, client, created_at
"#;

pub(super) const SELECT_EVENTS_BY_IDS: &str = r#"
    SELECT id, source_id, name, description, url, start_time, end_time
    FROM events
    WHERE id IN (
"#;

pub(super) const SELECT_CONNECTIONS_BY_EVENT_IDS: &str = r#"
    SELECT id, event_id, topic_id, client, created_at
    FROM event_connections
    WHERE event_id IN (
"#;

pub(super) const DELETE_CONNECTIONS_BY_IDS: &str = "DELETE FROM event_connections WHERE id IN (";

pub(super) const DELETE_CONNECTIONS_BY_EVENT_IDS: &str =
    "DELETE FROM event_connections WHERE event_id IN (";

pub(super) const DELETE_EVENTS_BY_IDS: &str = "DELETE FROM events WHERE id IN (";

pub(super) const SELECT_TOPIC_CUSTOM_FIELD: &str = r#"
    SELECT value
    FROM topic_custom_fields
    WHERE topic_id = ?1 AND name = ?2
"#;

pub(super) const UPSERT_TOPIC_CUSTOM_FIELD: &str = r#"
    INSERT INTO topic_custom_fields (topic_id, name, value)
    VALUES (?1, ?2, ?3)
    ON CONFLICT(topic_id, name) DO UPDATE SET value = excluded.value
"#;

pub(super) const SELECT_FIRST_POST: &str = r#"
    SELECT id, topic_id, post_number
    FROM posts
    WHERE topic_id = ?1
      AND post_number = 1
      AND deleted_at IS NULL
    LIMIT 1
"#;

pub(super) const SELECT_POST_EVENT_EXISTS: &str = r#"
    SELECT EXISTS (SELECT 1 FROM post_events WHERE post_id = ?1) AS present
"#;

pub(super) const INSERT_POST_EVENT: &str = r#"
    INSERT INTO post_events (post_id, event_id, name, starts_at, ends_at)
    VALUES (?1, ?2, ?3, ?4, ?5)
"#;

pub(super) const TRASH_POST: &str = r#"
    UPDATE posts
    SET deleted_at = ?2
    WHERE id = ?1 AND deleted_at IS NULL
"#;

pub(super) const TRASH_TOPIC: &str = r#"
    UPDATE topics
    SET deleted_at = ?2
    WHERE id = ?1 AND deleted_at IS NULL
"#;

pub(super) const TRASH_TOPIC_POSTS: &str = r#"
    UPDATE posts
    SET deleted_at = ?2
    WHERE topic_id = ?1 AND deleted_at IS NULL
"#;
