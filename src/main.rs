// src/main.rs — Screenpass entry point

use clap::Parser;
use std::sync::Arc;

use screenpass::cli::{Cli, Commands};
use screenpass::core::Orchestrator;
use screenpass::infra::config::Config;
use screenpass::infra::logger;
use screenpass::session::InMemorySessionStore;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Respects RUST_LOG
    logger::init_logging(&cli.log_level);

    if let Err(e) = run(cli).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Falls back to defaults if no screenpass.toml
    let config = if let Some(ref path) = cli.config {
        Config::load_from(std::path::Path::new(path))?
    } else {
        Config::load()?
    };

    match cli.command {
        Commands::Serve { port } => screenpass::cli::serve::run_serve(&config, port).await,
        Commands::Chat {
            lead_source,
            company,
            yes,
        } => {
            let store = Arc::new(InMemorySessionStore::new(None));
            let orchestrator = Orchestrator::from_config(&config, store);
            screenpass::cli::chat::run_chat(&orchestrator, &lead_source, &company, yes).await
        }
    }
}
