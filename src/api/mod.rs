// src/api/mod.rs — HTTP API exposing the conversation handlers to the chat widget

pub mod auth;
pub mod handlers;
pub mod types;

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::core::Orchestrator;
use crate::infra::config::ServerSettings;

/// Shared state for API handlers.
#[derive(Clone)]
pub struct ApiState {
    pub orchestrator: Arc<Orchestrator>,
    pub token: Option<String>,
}

/// Build the axum router with all API routes.
pub fn build_router(state: ApiState) -> Router {
    // The widget is embedded on arbitrary job-board pages.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/v1/conversations/init", post(handlers::init_conversation))
        .route("/api/v1/conversations/turn", post(handlers::process_turn))
        .route(
            "/api/v1/conversations/summarize",
            post(handlers::summarize_conversation),
        )
        .route("/api/v1/health", get(handlers::health))
        .layer(cors)
        .with_state(state)
}

/// Start the API server (runs until the process is stopped).
pub async fn start_server(config: &ServerSettings, state: ApiState) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);

    let router = build_router(state);

    tracing::info!("API server listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down API server");
        })
        .await?;
    Ok(())
}
