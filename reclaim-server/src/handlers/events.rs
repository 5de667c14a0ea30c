//! Event stream handler
//!
//! Exposes the recorded notification stream with cursor-based pagination.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::event_log::StoredEvent;
use crate::state::AppState;

/// Query parameters for reading the event stream
#[derive(Debug, Deserialize, IntoParams)]
pub struct EventsQuery {
    /// Return events with sequence numbers strictly greater than this cursor
    #[param(default = 0)]
    pub after: Option<u64>,

    /// Maximum number of events to return (max 1000)
    #[param(default = 100, minimum = 1, maximum = 1000)]
    pub limit: Option<usize>,
}

/// Page of recorded events
#[derive(Debug, Serialize, ToSchema)]
pub struct EventListResponse {
    pub events: Vec<StoredEvent>,
    /// Cursor for the next page; pass back as `after`
    pub next_after: u64,
}

/// GET /api/v1/events - Read the notification stream
///
/// Events are append-only and ordered; consumers poll with the `after`
/// cursor to receive each emission exactly once.
#[utoipa::path(
    get,
    path = "/api/v1/events",
    tag = "Events",
    params(EventsQuery),
    responses(
        (status = 200, description = "Page of events", body = EventListResponse)
    )
)]
pub async fn list_events_handler(
    State(state): State<AppState>,
    Query(query): Query<EventsQuery>,
) -> Json<EventListResponse> {
    let after = query.after.unwrap_or(0);
    let limit = query.limit.unwrap_or(100).clamp(1, 1000);

    let events = state.events.after(after, limit);
    let next_after = events.last().map_or(after, |event| event.seq);

    Json(EventListResponse { events, next_after })
}
