//! API integration tests for reclaim-server.
//!
//! These tests drive the full HTTP surface through the real router: report
//! submission, the match scan, the claim/handover state machine, and the
//! event stream, including the error mapping for every rejection class.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use reclaim_core::FixedScorer;
use reclaim_server::{create_router, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

const LOST_DIGEST: &str = "1111111111111111111111111111111111111111111111111111111111111111";
const FOUND_DIGEST: &str = "2222222222222222222222222222222222222222222222222222222222222222";

/// Build a test router whose scorer always lands above the match threshold.
fn create_test_app() -> Router {
    create_router(AppState::new(Arc::new(FixedScorer(9_100))))
}

fn report_body(kind: &str, category: &str, digest: &str, confidence: u16) -> Value {
    json!({
        "kind": kind,
        "category": category,
        "description": format!("{category} ({kind})"),
        "media_ref": "bafybeigdyrzt5example",
        "feature_digest": digest,
        "confidence": confidence,
        "location": "central station",
    })
}

fn post_json(uri: &str, caller: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json");
    if let Some(caller) = caller {
        builder = builder.header("x-caller-id", caller);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Submit a report and return its id, asserting 201.
async fn submit_report(app: &Router, caller: &str, kind: &str, digest: &str, confidence: u16) -> u64 {
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/v1/reports",
            Some(caller),
            &report_body(kind, "backpack", digest, confidence),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response).await["id"].as_u64().unwrap()
}

// ============================================================================
// Health & Readiness Tests
// ============================================================================

#[tokio::test]
async fn test_health_endpoint_returns_ok() {
    let app = create_test_app();

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "reclaim-server");
    assert_eq!(json["reports"], 0);
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_ready_endpoint_returns_ok() {
    let app = create_test_app();

    let response = app.oneshot(get("/ready")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// ============================================================================
// Report Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_create_report_assigns_dense_ids() {
    let app = create_test_app();

    let first = submit_report(&app, "alice", "lost", LOST_DIGEST, 9_000).await;
    let second = submit_report(&app, "bob", "found", FOUND_DIGEST, 9_200).await;
    assert_eq!(first, 1);
    assert_eq!(second, 2);
}

#[tokio::test]
async fn test_create_report_requires_caller_header() {
    let app = create_test_app();

    let response = app
        .oneshot(post_json(
            "/api/v1/reports",
            None,
            &report_body("lost", "backpack", LOST_DIGEST, 9_000),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(response).await["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_create_report_rejects_confidence_above_scale() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/v1/reports",
            Some("alice"),
            &report_body("lost", "backpack", LOST_DIGEST, 10_001),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["code"], "INVALID_CONFIDENCE");

    // Nothing was stored.
    let response = app.oneshot(get("/api/v1/reports/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_report_rejects_malformed_digest() {
    let app = create_test_app();

    let response = app
        .oneshot(post_json(
            "/api/v1/reports",
            Some("alice"),
            &report_body("lost", "backpack", "not-hex", 9_000),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_get_report_round_trip() {
    let app = create_test_app();
    let id = submit_report(&app, "alice", "lost", LOST_DIGEST, 9_000).await;

    let response = app
        .clone()
        .oneshot(get(&format!("/api/v1/reports/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["reporter"], "alice");
    assert_eq!(json["kind"], "lost");
    assert_eq!(json["category"], "backpack");
    assert_eq!(json["feature_digest"], LOST_DIGEST);
    assert_eq!(json["confidence"], 9_000);
    assert_eq!(json["status"], "open");
    assert!(json.get("matched_with").is_none());
}

#[tokio::test]
async fn test_get_report_unknown_id() {
    let app = create_test_app();

    let response = app.oneshot(get("/api/v1/reports/42")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_list_reports_with_filters() {
    let app = create_test_app();
    submit_report(&app, "alice", "lost", LOST_DIGEST, 9_000).await;
    submit_report(&app, "bob", "found", FOUND_DIGEST, 9_200).await;
    submit_report(&app, "carol", "found", FOUND_DIGEST, 8_000).await;

    let response = app
        .clone()
        .oneshot(get("/api/v1/reports?kind=found"))
        .await
        .unwrap();
    let json = json_body(response).await;
    assert_eq!(json["total"], 2);
    assert_eq!(json["reports"].as_array().unwrap().len(), 2);

    let response = app
        .oneshot(get("/api/v1/reports?page=2&limit=2"))
        .await
        .unwrap();
    let json = json_body(response).await;
    assert_eq!(json["total"], 3);
    assert_eq!(json["reports"][0]["id"], 3);
}

// ============================================================================
// Scan & Event Stream Tests
// ============================================================================

#[tokio::test]
async fn test_scan_emits_potential_match_event() {
    let app = create_test_app();
    let lost = submit_report(&app, "alice", "lost", LOST_DIGEST, 9_000).await;
    let found = submit_report(&app, "bob", "found", FOUND_DIGEST, 9_200).await;

    let response = app
        .clone()
        .oneshot(post_json(
            &format!("/api/v1/reports/{found}/scan"),
            None,
            &json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::ACCEPTED);

    let response = app.oneshot(get("/api/v1/events")).await.unwrap();
    let json = json_body(response).await;
    let events = json["events"].as_array().unwrap();

    assert_eq!(events.len(), 3, "two creations plus one match");
    assert_eq!(events[2]["type"], "potential_match");
    assert_eq!(events[2]["lost_id"], lost);
    assert_eq!(events[2]["found_id"], found);
    assert_eq!(events[2]["score"], 9_100);
}

#[tokio::test]
async fn test_scan_unknown_report_is_404() {
    let app = create_test_app();

    let response = app
        .oneshot(post_json("/api/v1/reports/7/scan", None, &json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_events_cursor_pagination() {
    let app = create_test_app();
    submit_report(&app, "alice", "lost", LOST_DIGEST, 9_000).await;
    submit_report(&app, "bob", "found", FOUND_DIGEST, 9_200).await;

    let response = app
        .clone()
        .oneshot(get("/api/v1/events?after=1"))
        .await
        .unwrap();
    let json = json_body(response).await;
    let events = json["events"].as_array().unwrap();

    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["seq"], 2);
    assert_eq!(json["next_after"], 2);

    // Draining past the end returns an empty page with a stable cursor.
    let response = app.oneshot(get("/api/v1/events?after=2")).await.unwrap();
    let json = json_body(response).await;
    assert!(json["events"].as_array().unwrap().is_empty());
    assert_eq!(json["next_after"], 2);
}

// ============================================================================
// Claim & Handover Tests
// ============================================================================

#[tokio::test]
async fn test_claim_requires_lost_reporter() {
    let app = create_test_app();
    let lost = submit_report(&app, "alice", "lost", LOST_DIGEST, 9_000).await;
    let found = submit_report(&app, "bob", "found", FOUND_DIGEST, 9_200).await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/v1/claims",
            Some("mallory"),
            &json!({ "lost_id": lost, "found_id": found }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(json_body(response).await["code"], "FORBIDDEN");

    // Both reports are untouched.
    let response = app
        .oneshot(get(&format!("/api/v1/reports/{lost}")))
        .await
        .unwrap();
    assert_eq!(json_body(response).await["status"], "open");
}

#[tokio::test]
async fn test_claim_with_swapped_ids_is_bad_request() {
    let app = create_test_app();
    let lost = submit_report(&app, "alice", "lost", LOST_DIGEST, 9_000).await;
    let found = submit_report(&app, "bob", "found", FOUND_DIGEST, 9_200).await;

    let response = app
        .oneshot(post_json(
            "/api/v1/claims",
            Some("alice"),
            &json!({ "lost_id": found, "found_id": lost }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["code"], "WRONG_REPORT_KIND");
}

#[tokio::test]
async fn test_handover_before_claim_is_conflict() {
    let app = create_test_app();
    let lost = submit_report(&app, "alice", "lost", LOST_DIGEST, 9_000).await;
    let found = submit_report(&app, "bob", "found", FOUND_DIGEST, 9_200).await;

    let response = app
        .oneshot(post_json(
            "/api/v1/handovers",
            Some("alice"),
            &json!({ "lost_id": lost, "found_id": found }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(json_body(response).await["code"], "NOT_MATCHED");
}

#[tokio::test]
async fn test_full_lifecycle_over_http() {
    let app = create_test_app();
    let lost = submit_report(&app, "alice", "lost", LOST_DIGEST, 9_000).await;
    let found = submit_report(&app, "bob", "found", FOUND_DIGEST, 9_200).await;

    // Claim by the lost reporter.
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/v1/claims",
            Some("alice"),
            &json!({ "lost_id": lost, "found_id": found }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["lost_status"], "matched");
    assert_eq!(json["found_status"], "matched");

    // The pair is symmetric.
    let response = app
        .clone()
        .oneshot(get(&format!("/api/v1/reports/{found}")))
        .await
        .unwrap();
    assert_eq!(json_body(response).await["matched_with"], lost);

    // Handover confirmed by the found reporter.
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/v1/handovers",
            Some("bob"),
            &json!({ "lost_id": lost, "found_id": found }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["lost_status"], "claimed");
    assert_eq!(json["found_status"], "closed");

    // Terminal states stay terminal.
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/v1/handovers",
            Some("alice"),
            &json!({ "lost_id": lost, "found_id": found }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // The stream recorded one emission per successful transition.
    let response = app.oneshot(get("/api/v1/events")).await.unwrap();
    let events = json_body(response).await["events"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["type"].as_str().unwrap().to_owned())
        .collect::<Vec<_>>();
    assert_eq!(
        events,
        vec![
            "report_created",
            "report_created",
            "claim_initiated",
            "item_returned",
        ]
    );
}

// ============================================================================
// OpenAPI Tests
// ============================================================================

#[tokio::test]
async fn test_openapi_spec_is_served() {
    let app = create_test_app();

    let response = app.oneshot(get("/api-docs/openapi.json")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["info"]["title"], "Reclaim - Lost & Found Registry API");
    assert!(json["paths"]["/api/v1/reports"].is_object());
}
