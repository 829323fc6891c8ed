// src/api/handlers.rs

use crate::api::{auth, types::*, ApiState};
use crate::core::types::{InitResponse, SummaryResponse, TurnResponse};
use crate::core::SummarizeInput;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

/// POST /api/v1/conversations/init — Start a session and return the greeting.
pub async fn init_conversation(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Json(body): Json<InitRequest>,
) -> ApiResult<InitResponse> {
    auth::check_auth(&state, &headers)?;

    let resp = state
        .orchestrator
        .initialize(&body.lead_source, &body.company, &body.session_id)
        .await;
    Ok(Json(resp))
}

/// POST /api/v1/conversations/turn — Reply to one applicant message.
pub async fn process_turn(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Json(body): Json<TurnRequest>,
) -> ApiResult<TurnResponse> {
    auth::check_auth(&state, &headers)?;

    let resp = state
        .orchestrator
        .process_turn(&body.user_input, body.conversation_history, &body.session_id)
        .await;
    Ok(Json(resp))
}

/// POST /api/v1/conversations/summarize — End the chat and record the analysis.
pub async fn summarize_conversation(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Json(body): Json<SummarizeInput>,
) -> ApiResult<SummaryResponse> {
    auth::check_auth(&state, &headers)?;

    let resp = state.orchestrator.summarize(body).await;
    Ok(Json(resp))
}

/// GET /api/v1/health — Simple health check.
pub async fn health(State(state): State<ApiState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "active_sessions": state.orchestrator.sessions().active_count(),
    }))
}
