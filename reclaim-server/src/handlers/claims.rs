//! Claim and handover handlers
//!
//! Walks a matched Lost/Found pair through the claim state machine.

use axum::{extract::State, http::HeaderMap, Json};
use reclaim_core::ReportStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::handlers::caller_identity;
use crate::state::AppState;

/// A Lost/Found report pair
#[derive(Debug, Deserialize, ToSchema)]
pub struct PairRequest {
    /// Id of the Lost-kind report
    pub lost_id: u64,
    /// Id of the Found-kind report
    pub found_id: u64,
}

/// Pair statuses after a successful transition
#[derive(Debug, Serialize, ToSchema)]
pub struct PairResponse {
    pub lost_id: u64,
    pub found_id: u64,
    #[schema(value_type = String, example = "matched")]
    pub lost_status: ReportStatus,
    #[schema(value_type = String, example = "matched")]
    pub found_status: ReportStatus,
}

/// POST /api/v1/claims - Initiate a claim over a Lost/Found pair
///
/// Only the lost report's reporter may claim. Both reports transition to
/// `matched` with symmetric counterpart links.
#[utoipa::path(
    post,
    path = "/api/v1/claims",
    tag = "Claims",
    request_body = PairRequest,
    responses(
        (status = 200, description = "Pair matched", body = PairResponse),
        (status = 400, description = "Kind mismatch"),
        (status = 401, description = "Missing caller identity"),
        (status = 403, description = "Caller is not the lost reporter"),
        (status = 404, description = "Unknown report id"),
        (status = 409, description = "A report already left the open state")
    )
)]
pub async fn initiate_claim_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<PairRequest>,
) -> Result<Json<PairResponse>, ApiError> {
    let caller = caller_identity(&headers)?;

    let mut registry = state.registry.write().await;
    registry.initiate_claim(request.lost_id, request.found_id, &caller)?;

    Ok(Json(PairResponse {
        lost_id: request.lost_id,
        found_id: request.found_id,
        lost_status: registry.get_report(request.lost_id)?.status,
        found_status: registry.get_report(request.found_id)?.status,
    }))
}

/// POST /api/v1/handovers - Confirm the physical handover of a matched pair
///
/// Either side's reporter may confirm. The lost report terminates as
/// `claimed`, the found report as `closed`; a second confirmation is
/// rejected.
#[utoipa::path(
    post,
    path = "/api/v1/handovers",
    tag = "Claims",
    request_body = PairRequest,
    responses(
        (status = 200, description = "Handover confirmed", body = PairResponse),
        (status = 401, description = "Missing caller identity"),
        (status = 403, description = "Caller is on neither side of the pair"),
        (status = 404, description = "Unknown report id"),
        (status = 409, description = "Pair is not currently matched")
    )
)]
pub async fn confirm_handover_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<PairRequest>,
) -> Result<Json<PairResponse>, ApiError> {
    let caller = caller_identity(&headers)?;

    let mut registry = state.registry.write().await;
    registry.confirm_handover(request.lost_id, request.found_id, &caller)?;

    Ok(Json(PairResponse {
        lost_id: request.lost_id,
        found_id: request.found_id,
        lost_status: registry.get_report(request.lost_id)?.status,
        found_status: registry.get_report(request.found_id)?.status,
    }))
}
