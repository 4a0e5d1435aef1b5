use super::mapper::{map_connected_topic_row, map_event_row, map_listing_source};
use super::queries::{
    CONNECTED_CLAUSE, COUNT_EVENTS, SELECT_EVENT_BY_ID, SELECT_EVENT_LISTING,
    SELECT_LISTING_CONNECTIONS,
};
use super::{SqliteRepository, push_id_list};
use crate::application::ports::{EventListQuery, EventRepository};
use crate::domain::entities::{ConnectedTopic, Event, EventListing};
use crate::domain::value_objects::EventFilter;
use crate::shared::error::AppError;
use async_trait::async_trait;
use sqlx::{QueryBuilder, Row, Sqlite};
use std::collections::HashMap;

fn push_filter(builder: &mut QueryBuilder<'_, Sqlite>, filter: Option<EventFilter>) {
    match filter {
        Some(EventFilter::Connected) => {
            builder.push(" WHERE ").push(CONNECTED_CLAUSE);
        }
        Some(EventFilter::Unconnected) => {
            builder.push(" WHERE NOT ").push(CONNECTED_CLAUSE);
        }
        None => {}
    }
}

impl SqliteRepository {
    async fn listing_connections(
        &self,
        event_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<ConnectedTopic>>, AppError> {
        let mut grouped: HashMap<i64, Vec<ConnectedTopic>> = HashMap::new();
        if event_ids.is_empty() {
            return Ok(grouped);
        }

        let mut builder = QueryBuilder::<Sqlite>::new(SELECT_LISTING_CONNECTIONS);
        push_id_list(&mut builder, event_ids);
        builder.push(" ORDER BY ec.id ASC");

        let rows = builder.build().fetch_all(self.pool.get_pool()).await?;
        for row in rows {
            let (event_id, connected) = map_connected_topic_row(&row)?;
            grouped.entry(event_id).or_default().push(connected);
        }

        Ok(grouped)
    }
}

#[async_trait]
impl EventRepository for SqliteRepository {
    async fn get_event(&self, id: i64) -> Result<Option<Event>, AppError> {
        let row = sqlx::query(SELECT_EVENT_BY_ID)
            .bind(id)
            .fetch_optional(self.pool.get_pool())
            .await?;

        match row {
            Some(row) => Ok(Some(map_event_row(&row)?)),
            None => Ok(None),
        }
    }

    async fn list_events(&self, query: &EventListQuery) -> Result<Vec<EventListing>, AppError> {
        let direction = query.direction.as_sql();
        let mut builder = QueryBuilder::<Sqlite>::new(SELECT_EVENT_LISTING);
        push_filter(&mut builder, query.filter);
        // Column and direction come from closed enums, never from the request.
        builder.push(format!(
            " ORDER BY {} {direction}, e.id {direction}",
            query.order.column()
        ));
        builder
            .push(" LIMIT ")
            .push_bind(query.limit)
            .push(" OFFSET ")
            .push_bind(query.offset);

        let rows = builder.build().fetch_all(self.pool.get_pool()).await?;

        let mut listings = Vec::with_capacity(rows.len());
        for row in rows {
            let event = map_event_row(&row)?;
            let source = map_listing_source(&row)?;
            listings.push(EventListing::new(event, source));
        }

        let ids: Vec<i64> = listings.iter().map(|listing| listing.event.id).collect();
        let mut connections = self.listing_connections(&ids).await?;
        for listing in &mut listings {
            if let Some(found) = connections.remove(&listing.event.id) {
                listing.connections = found;
            }
        }

        Ok(listings)
    }

    async fn count_events(&self, filter: Option<EventFilter>) -> Result<u64, AppError> {
        let mut builder = QueryBuilder::<Sqlite>::new(COUNT_EVENTS);
        push_filter(&mut builder, filter);

        let count: i64 = builder
            .build()
            .fetch_one(self.pool.get_pool())
            .await?
            .try_get("count")?;

        Ok(count.max(0) as u64)
    }
}
