use crate::{
    application::services::{EventConnector, EventDestroyer, EventQueryService},
    presentation::dto::{
        Validate,
        event_dto::{
            ConnectEventRequest, DestroyEventsRequest, DestroyEventsResponse, ListEventsRequest,
            ListEventsResponse,
        },
    },
    shared::error::AppError,
};
use std::sync::Arc;

pub struct EventHandler {
    query_service: Arc<EventQueryService>,
    connector: Arc<EventConnector>,
    destroyer: Arc<EventDestroyer>,
}

impl EventHandler {
    pub fn new(
        query_service: Arc<EventQueryService>,
        connector: Arc<EventConnector>,
        destroyer: Arc<EventDestroyer>,
    ) -> Self {
        Self {
            query_service,
            connector,
            destroyer,
        }
    }

    pub async fn list_events(
        &self,
        request: ListEventsRequest,
    ) -> Result<ListEventsResponse, AppError> {
        let page = self.query_service.list(request.to_params()).await?;
        Ok(ListEventsResponse::from(page))
    }

    pub async fn connect_event(&self, request: ConnectEventRequest) -> Result<(), AppError> {
        request
            .validate()
            .map_err(|_| AppError::InvalidParameter("client".to_string()))?;

        self.connector
            .connect(request.event_id, request.topic_id, request.client.trim())
            .await?;
        Ok(())
    }

    pub async fn destroy_events(
        &self,
        request: DestroyEventsRequest,
    ) -> Result<DestroyEventsResponse, AppError> {
        let outcome = self
            .destroyer
            .destroy(&request.event_ids, request.target)
            .await?;
        Ok(DestroyEventsResponse::from(outcome))
    }
}
