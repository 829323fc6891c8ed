// src/cli/mod.rs — CLI definition (clap derive)

pub mod chat;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::core::types::{DEFAULT_COMPANY, DEFAULT_LEAD_SOURCE};

#[derive(Parser)]
#[command(name = "screenpass", about = "Trucking-job screening chat agent", version)]
pub struct Cli {
    /// Config file path (defaults to ./screenpass.toml when present)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Log level when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API used by the chat widget
    Serve {
        /// Override the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Chat with the screening agent in the terminal
    Chat {
        /// Marketing channel label recorded with the conversation
        #[arg(long, default_value = DEFAULT_LEAD_SOURCE)]
        lead_source: String,
        /// Company identifier (companyA or companyB)
        #[arg(long, default_value = DEFAULT_COMPANY)]
        company: String,
        /// End without the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}
