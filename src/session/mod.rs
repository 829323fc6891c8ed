// src/session/mod.rs — Per-applicant conversation state

pub mod store;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::roles::CompanyConfig;

pub use store::{spawn_sweeper, InMemorySessionStore, SessionStore};

/// One applicant's chat between initialize and summarize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationSession {
    pub id: String,
    /// Transcript lines of the form `>{speaker}: {message}`, oldest first.
    pub history: Vec<String>,
    pub start_time: NaiveDateTime,
    pub lead_source: String,
    pub company: String,
    /// Absent for sessions synthesized at summarize time.
    pub company_config: Option<CompanyConfig>,
}

impl ConversationSession {
    pub fn new(
        id: &str,
        lead_source: &str,
        company: &str,
        company_config: CompanyConfig,
        start_time: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.to_string(),
            history: Vec::new(),
            start_time,
            lead_source: lead_source.to_string(),
            company: company.to_string(),
            company_config: Some(company_config),
        }
    }

    /// Stand-in for a session that was never initialized or already ended.
    pub fn synthesized(
        id: &str,
        lead_source: &str,
        company: &str,
        start_time: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.to_string(),
            history: Vec::new(),
            start_time,
            lead_source: lead_source.to_string(),
            company: company.to_string(),
            company_config: None,
        }
    }
}

/// Format one transcript line.
pub fn transcript_line(speaker: &str, message: &str) -> String {
    format!(">{speaker}: {message}")
}
