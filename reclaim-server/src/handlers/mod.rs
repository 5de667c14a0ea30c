//! Request handlers
//!
//! One module per resource. Mutating routes authenticate the caller through
//! the `x-caller-id` header; the registry receives identity as an explicit
//! parameter and never reads ambient state.

pub mod claims;
pub mod events;
pub mod health;
pub mod reports;
pub mod scan;

pub use claims::{confirm_handover_handler, initiate_claim_handler, PairRequest, PairResponse};
pub use events::{list_events_handler, EventListResponse};
pub use health::{health, ready, HealthResponse, ReadyResponse};
pub use reports::{
    create_report_handler, get_report_handler, list_reports_handler, CreateReportRequest,
    CreateReportResponse, ReportListResponse, ReportRecord,
};
pub use scan::scan_report_handler;

use axum::http::HeaderMap;

use crate::error::ApiError;

/// Header carrying the opaque principal identifier of the caller.
pub const CALLER_HEADER: &str = "x-caller-id";

/// Extract the caller identity from the request headers.
pub(crate) fn caller_identity(headers: &HeaderMap) -> Result<String, ApiError> {
    headers
        .get(CALLER_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| ApiError::unauthorized(format!("Missing {CALLER_HEADER} header")))
}
