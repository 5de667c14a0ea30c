//! Match scan handler

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/v1/reports/{id}/scan - Run the match scan for a report
///
/// Synchronously compares the report against every other report in the
/// registry. Results are not returned here: qualifying pairs surface as
/// `potential_match` entries on the event stream.
#[utoipa::path(
    post,
    path = "/api/v1/reports/{id}/scan",
    tag = "Matching",
    params(
        ("id" = u64, Path, description = "Report id to scan for counterparts")
    ),
    responses(
        (status = 202, description = "Scan completed; matches, if any, were emitted"),
        (status = 404, description = "Unknown report id")
    )
)]
pub async fn scan_report_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    // Read lock: the scan mutates nothing, and the lock guarantees the
    // consistent snapshot the scan semantics require.
    state.registry.read().await.scan_for_matches(id)?;
    Ok(StatusCode::ACCEPTED)
}
