//! OpenAPI documentation configuration
//!
//! Generates the OpenAPI 3.0 specification for the Reclaim registry API.

use utoipa::OpenApi;

use crate::event_log::StoredEvent;
use crate::handlers::{
    CreateReportRequest, CreateReportResponse, EventListResponse, HealthResponse, PairRequest,
    PairResponse, ReadyResponse, ReportListResponse, ReportRecord,
};

/// Reclaim Registry API - OpenAPI Documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Reclaim - Lost & Found Registry API",
        version = "0.1.0",
        description = r#"
## Lost-and-Found Report Registry

Reclaim keeps a registry of lost and found item reports and walks matched
pairs through a claim/handover state machine:

- **Submit** a lost or found report with an externally computed feature
  digest and confidence score via `POST /api/v1/reports`
- **Scan** for potential counterparts via `POST /api/v1/reports/{id}/scan`;
  qualifying pairs surface on the event stream
- **Claim** a pair as the lost-side reporter via `POST /api/v1/claims`
- **Confirm** the physical handover via `POST /api/v1/handovers`

Matching here is a deterministic placeholder: real similarity is expected
from an external embedding service consuming the event stream. Mutating
requests carry the caller's principal id in the `x-caller-id` header.
"#,
        license(
            name = "MIT OR Apache-2.0",
            url = "https://github.com/reclaim-registry/reclaim/blob/main/LICENSE"
        )
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    tags(
        (name = "Reports", description = "Submit and read lost/found reports"),
        (name = "Matching", description = "Run the synchronous match scan"),
        (name = "Claims", description = "Claim matched pairs and confirm handovers"),
        (name = "Events", description = "Poll the registry notification stream"),
        (name = "Health", description = "Service health and readiness endpoints")
    ),
    paths(
        crate::handlers::health::health,
        crate::handlers::health::ready,
        crate::handlers::reports::create_report_handler,
        crate::handlers::reports::get_report_handler,
        crate::handlers::reports::list_reports_handler,
        crate::handlers::scan::scan_report_handler,
        crate::handlers::claims::initiate_claim_handler,
        crate::handlers::claims::confirm_handover_handler,
        crate::handlers::events::list_events_handler,
    ),
    components(
        schemas(
            HealthResponse,
            ReadyResponse,
            CreateReportRequest,
            CreateReportResponse,
            ReportRecord,
            ReportListResponse,
            PairRequest,
            PairResponse,
            StoredEvent,
            EventListResponse,
        )
    )
)]
pub struct ApiDoc;
