// tests/api_test.rs — Integration test: HTTP round trip through the router

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use screenpass::api::{build_router, ApiState};
use screenpass::core::Orchestrator;
use screenpass::infra::config::LlmSettings;
use screenpass::persistence::ResultsWriter;
use screenpass::provider::canned::CANNED_REPLIES;
use screenpass::provider::LlmClient;
use screenpass::roles::RoleConfig;
use screenpass::session::InMemorySessionStore;

fn state(results: &std::path::Path) -> ApiState {
    let orchestrator = Orchestrator::new(
        Arc::new(RoleConfig::defaults()),
        LlmClient::from_settings("1234", &LlmSettings::default()),
        Arc::new(InMemorySessionStore::default()),
        ResultsWriter::new(results),
        10,
    );
    ApiState {
        orchestrator: Arc::new(orchestrator),
        token: None,
    }
}

async fn post(app: &axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn health(app: &axum::Router) -> Value {
    let req = Request::builder()
        .uri("/api/v1/health")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_http_conversation_lifecycle() {
    let tmp = tempfile::tempdir().unwrap();
    let app = build_router(state(tmp.path()));

    let (status, init) = post(
        &app,
        "/api/v1/conversations/init",
        json!({"leadSource": "indeed", "company": "companyB", "sessionId": "w1"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(init["success"], true);
    assert!(CANNED_REPLIES.contains(&init["message"].as_str().unwrap()));
    assert_eq!(health(&app).await["active_sessions"], 1);

    let (_, turn) = post(
        &app,
        "/api/v1/conversations/turn",
        json!({
            "user_input": "I have a CDL",
            "conversation_history": [">Screenpass: Hi", ">Trucker: I have a CDL"],
            "session_id": "w1"
        }),
    )
    .await;
    assert_eq!(turn["success"], true);

    let (_, summary) = post(
        &app,
        "/api/v1/conversations/summarize",
        json!({
            "conversation_history": [">Screenpass: Hi", ">Trucker: I have a CDL"],
            "start_time": "2025-06-02T09:00:00",
            "end_time": "2025-06-02T09:03:30.500",
            "lead_source": "indeed",
            "company": "companyB",
            "session_id": "w1"
        }),
    )
    .await;
    assert_eq!(summary["success"], true);
    // Canned replies never parse as a score
    assert_eq!(summary["sentiment_score"], 3);
    assert_eq!(health(&app).await["active_sessions"], 0);

    assert!(tmp
        .path()
        .join("audit/conversation_20250602_090000_20250602_090330.txt")
        .exists());
    assert!(tmp.path().join("sentiment.csv").exists());
    assert!(tmp.path().join("decisions.csv").exists());
}

#[tokio::test]
async fn test_turn_unknown_session() {
    let tmp = tempfile::tempdir().unwrap();
    let app = build_router(state(tmp.path()));

    let (status, turn) = post(
        &app,
        "/api/v1/conversations/turn",
        json!({"user_input": "hello", "conversation_history": [], "session_id": "nope"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(turn["success"], false);
    assert_eq!(turn["error"], "Session not found");
}
