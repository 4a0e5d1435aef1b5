use crate::application::ports::{EventListQuery, EventRepository};
use crate::domain::constants::EVENTS_PAGE_LIMIT;
use crate::domain::entities::EventListing;
use crate::domain::value_objects::{EventFilter, EventOrder, SortDirection};
use crate::shared::error::AppError;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventQueryParams {
    pub filter: Option<EventFilter>,
    pub page: i64,
    pub order: EventOrder,
    pub direction: SortDirection,
}

#[derive(Debug, Clone)]
pub struct EventPage {
    pub page: i64,
    pub filter: Option<EventFilter>,
    pub order: EventOrder,
    pub direction: SortDirection,
    pub events: Vec<EventListing>,
    /// Over all events, regardless of filter and page.
    pub with_topics_count: u64,
    /// Over all events, regardless of filter and page.
    pub without_topics_count: u64,
}

/// Read-only listing of events for the admin screens.
pub struct EventQueryService {
    repository: Arc<dyn EventRepository>,
}

impl EventQueryService {
    pub fn new(repository: Arc<dyn EventRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self, params: EventQueryParams) -> Result<EventPage, AppError> {
        let with_topics_count = self
            .repository
            .count_events(Some(EventFilter::Connected))
            .await?;
        let without_topics_count = self
            .repository
            .count_events(Some(EventFilter::Unconnected))
            .await?;

        let events = match page_offset(params.page) {
            Some(offset) => {
                let query = EventListQuery {
                    filter: params.filter,
                    order: params.order,
                    direction: params.direction,
                    limit: EVENTS_PAGE_LIMIT,
                    offset,
                };
                self.repository.list_events(&query).await?
            }
            None => {
                debug!(page = params.page, "Page out of range, returning empty page");
                Vec::new()
            }
        };

        Ok(EventPage {
            page: params.page,
            filter: params.filter,
            order: params.order,
            direction: params.direction,
            events,
            with_topics_count,
            without_topics_count,
        })
    }
}

fn page_offset(page: i64) -> Option<i64> {
    if page < 0 {
        return None;
    }
    page.checked_mul(EVENTS_PAGE_LIMIT)
}
