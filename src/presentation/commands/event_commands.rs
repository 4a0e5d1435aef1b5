use crate::{
    presentation::dto::{
        ApiResponse,
        event_dto::{
            ConnectEventRequest, DestroyEventsRequest, DestroyEventsResponse, ListEventsRequest,
            ListEventsResponse,
        },
    },
    state::AppState,
};

/// List events with both connection counts.
pub async fn list_events(
    state: &AppState,
    request: ListEventsRequest,
) -> ApiResponse<ListEventsResponse> {
    let result = state.event_handler.list_events(request).await;
    ApiResponse::from_result(result)
}

/// Link an event to a topic through a sync client.
pub async fn connect_event(state: &AppState, request: ConnectEventRequest) -> ApiResponse<()> {
    let result = state.event_handler.connect_event(request).await;
    ApiResponse::from_result(result)
}

/// Delete events, their topics, or both.
pub async fn destroy_events(
    state: &AppState,
    request: DestroyEventsRequest,
) -> ApiResponse<DestroyEventsResponse> {
    let result = state.event_handler.destroy_events(request).await;
    ApiResponse::from_result(result)
}
