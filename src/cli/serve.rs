// src/cli/serve.rs — `screenpass serve`

use std::sync::Arc;

use crate::api::{self, ApiState};
use crate::core::Orchestrator;
use crate::infra::config::Config;
use crate::session::{spawn_sweeper, InMemorySessionStore};

pub async fn run_serve(config: &Config, port: Option<u16>) -> anyhow::Result<()> {
    let mut server = config.server.clone();
    if let Some(port) = port {
        server.port = port;
    }

    let store = Arc::new(InMemorySessionStore::new(config.sessions.ttl()));
    let sweeper = config
        .sessions
        .ttl()
        .map(|_| spawn_sweeper(store.clone(), config.sessions.sweep_interval()));

    let orchestrator = Orchestrator::from_config(config, store);
    tracing::info!(
        roles = %orchestrator.roles().source,
        results = %orchestrator.writer().results_dir().display(),
        "Orchestrator ready"
    );

    let state = ApiState {
        orchestrator: Arc::new(orchestrator),
        token: server.token.clone(),
    };
    let result = api::start_server(&server, state).await;

    if let Some(handle) = sweeper {
        handle.abort();
    }
    result
}
