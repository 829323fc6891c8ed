// src/api/types.rs

use serde::{Deserialize, Serialize};

use crate::core::types::{default_company, default_lead_source};

/// Request body for starting a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitRequest {
    #[serde(default = "default_lead_source", alias = "leadSource")]
    pub lead_source: String,
    #[serde(default = "default_company")]
    pub company: String,
    #[serde(alias = "sessionId")]
    pub session_id: String,
}

/// Request body for one applicant message. `conversation_history` must be
/// the full transcript so far, including the message being sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnRequest {
    #[serde(alias = "userInput")]
    pub user_input: String,
    #[serde(default, alias = "conversationHistory")]
    pub conversation_history: Vec<String>,
    #[serde(alias = "sessionId")]
    pub session_id: String,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
