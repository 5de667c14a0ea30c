//! Report handlers
//!
//! Handles report submission, retrieval, and listing.

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use chrono::{DateTime, Utc};
use reclaim_core::{DigestParseError, Report, ReportKind, ReportStatus, ReportSubmission};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;
use crate::handlers::caller_identity;
use crate::state::AppState;

/// Request body for submitting a report
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateReportRequest {
    /// Report kind
    #[schema(value_type = String, example = "lost")]
    pub kind: ReportKind,
    /// Free-text category; match candidates must agree exactly
    #[schema(example = "backpack")]
    pub category: String,
    pub description: String,
    /// Opaque content-addressed media reference, stored but never resolved
    #[schema(example = "bafybeigdyrzt5sfp7udm7hu76uh7y26nf3efuylqabf3oclgtqy55fbzdi")]
    pub media_ref: String,
    /// Feature digest as a 64-character hex string
    #[schema(example = "a1b2c3d4e5f6a7b8a1b2c3d4e5f6a7b8a1b2c3d4e5f6a7b8a1b2c3d4e5f6a7b8")]
    pub feature_digest: String,
    /// Externally computed confidence, fixed-point scaled by 10000
    #[schema(maximum = 10000, example = 9000)]
    pub confidence: u16,
    pub location: String,
}

/// Response for successful report creation
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateReportResponse {
    /// The newly assigned report id
    pub id: u64,
}

/// Report record as returned by the API
#[derive(Debug, Serialize, ToSchema)]
pub struct ReportRecord {
    pub id: u64,
    /// Opaque principal identifier of the submitter
    pub reporter: String,
    #[schema(value_type = String, example = "lost")]
    pub kind: ReportKind,
    pub category: String,
    pub description: String,
    pub media_ref: String,
    /// Hex-encoded feature digest
    pub feature_digest: String,
    pub confidence: u16,
    pub location: String,
    #[schema(value_type = String, example = "2026-08-06T10:00:00Z")]
    pub created_at: DateTime<Utc>,
    #[schema(value_type = String, example = "open")]
    pub status: ReportStatus,
    /// Counterpart report id once matched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_with: Option<u64>,
}

impl From<&Report> for ReportRecord {
    fn from(report: &Report) -> Self {
        Self {
            id: report.id,
            reporter: report.reporter.clone(),
            kind: report.kind,
            category: report.category.clone(),
            description: report.description.clone(),
            media_ref: report.media_ref.clone(),
            feature_digest: report.feature_digest.to_string(),
            confidence: report.confidence,
            location: report.location.clone(),
            created_at: report.created_at,
            status: report.status,
            matched_with: report.matched_with,
        }
    }
}

/// Query parameters for listing reports
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListReportsQuery {
    /// Page number (1-indexed)
    #[param(default = 1, minimum = 1)]
    pub page: Option<u64>,

    /// Items per page (max 100)
    #[param(default = 20, minimum = 1, maximum = 100)]
    pub limit: Option<u64>,

    /// Filter by kind
    #[param(value_type = Option<String>, example = "lost")]
    pub kind: Option<ReportKind>,

    /// Filter by status
    #[param(value_type = Option<String>, example = "open")]
    pub status: Option<ReportStatus>,
}

/// Paginated report listing
#[derive(Debug, Serialize, ToSchema)]
pub struct ReportListResponse {
    pub reports: Vec<ReportRecord>,
    /// Total number of reports matching the filters
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}

/// POST /api/v1/reports - Submit a lost or found report
///
/// The caller identity comes from the `x-caller-id` header and becomes the
/// report's immutable reporter. Confidence above 10000 is rejected before
/// any state change.
#[utoipa::path(
    post,
    path = "/api/v1/reports",
    tag = "Reports",
    request_body = CreateReportRequest,
    responses(
        (status = 201, description = "Report created", body = CreateReportResponse),
        (status = 400, description = "Invalid digest or confidence"),
        (status = 401, description = "Missing caller identity")
    )
)]
pub async fn create_report_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<CreateReportRequest>,
) -> Result<(StatusCode, Json<CreateReportResponse>), ApiError> {
    let caller = caller_identity(&headers)?;

    let feature_digest = request
        .feature_digest
        .parse()
        .map_err(|e: DigestParseError| ApiError::bad_request(format!("Invalid feature_digest: {e}")))?;

    let submission = ReportSubmission {
        kind: request.kind,
        category: request.category,
        description: request.description,
        media_ref: request.media_ref,
        feature_digest,
        confidence: request.confidence,
        location: request.location,
    };

    let id = state.registry.write().await.create_report(caller, submission)?;

    Ok((StatusCode::CREATED, Json(CreateReportResponse { id })))
}

/// GET /api/v1/reports/{id} - Fetch a single report
#[utoipa::path(
    get,
    path = "/api/v1/reports/{id}",
    tag = "Reports",
    params(
        ("id" = u64, Path, description = "Report id")
    ),
    responses(
        (status = 200, description = "The report", body = ReportRecord),
        (status = 404, description = "Unknown report id")
    )
)]
pub async fn get_report_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<ReportRecord>, ApiError> {
    let registry = state.registry.read().await;
    let report = registry.get_report(id)?;
    Ok(Json(ReportRecord::from(report)))
}

/// GET /api/v1/reports - List reports
///
/// Returns reports in id order, optionally filtered by kind and status.
#[utoipa::path(
    get,
    path = "/api/v1/reports",
    tag = "Reports",
    params(ListReportsQuery),
    responses(
        (status = 200, description = "Page of reports", body = ReportListResponse)
    )
)]
pub async fn list_reports_handler(
    State(state): State<AppState>,
    Query(query): Query<ListReportsQuery>,
) -> Json<ReportListResponse> {
    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(20).clamp(1, 100);

    let registry = state.registry.read().await;
    let filtered: Vec<&Report> = registry
        .reports()
        .iter()
        .filter(|r| query.kind.is_none_or(|kind| r.kind == kind))
        .filter(|r| query.status.is_none_or(|status| r.status == status))
        .collect();

    let total = filtered.len() as u64;
    let reports = filtered
        .into_iter()
        .skip(((page - 1) * limit) as usize)
        .take(limit as usize)
        .map(ReportRecord::from)
        .collect();

    Json(ReportListResponse {
        reports,
        total,
        page,
        limit,
    })
}
