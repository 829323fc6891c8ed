// src/core/mod.rs — Conversation orchestration

pub mod analysis;
pub mod orchestrator;
pub mod prompts;
pub mod types;

pub use orchestrator::{Orchestrator, SummarizeInput};
