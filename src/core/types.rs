// src/core/types.rs — Result mappings returned by the three conversation handlers

use serde::{Deserialize, Serialize};

use crate::roles::CompanyConfig;

/// Shown when initialize fails; the chat stays usable.
pub const GENERIC_GREETING: &str = "Welcome! I'm here to help you with your trucking career.";
pub const SESSION_NOT_FOUND_MESSAGE: &str =
    "Please refresh the page and start a new conversation.";
pub const TURN_ERROR_MESSAGE: &str = "I'm sorry, I encountered an error. Please try again.";
pub const SUMMARIZE_OK_MESSAGE: &str = "Conversation summarized and analyzed successfully";

/// Used when the caller does not say where the applicant came from.
pub const DEFAULT_LEAD_SOURCE: &str = "direct";
pub const DEFAULT_COMPANY: &str = "companyA";

pub fn default_lead_source() -> String {
    DEFAULT_LEAD_SOURCE.into()
}

pub fn default_company() -> String {
    DEFAULT_COMPANY.into()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_config: Option<CompanyConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl InitResponse {
    pub fn ok(message: String, company_config: CompanyConfig) -> Self {
        Self {
            success: true,
            message,
            company_config: Some(company_config),
            error: None,
        }
    }

    pub fn failed(error: impl ToString) -> Self {
        Self {
            success: false,
            message: GENERIC_GREETING.into(),
            company_config: None,
            error: Some(error.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TurnResponse {
    pub fn ok(message: String) -> Self {
        Self {
            success: true,
            message,
            error: None,
        }
    }

    pub fn session_not_found() -> Self {
        Self {
            success: false,
            message: SESSION_NOT_FOUND_MESSAGE.into(),
            error: Some("Session not found".into()),
        }
    }

    pub fn failed(error: impl ToString) -> Self {
        Self {
            success: false,
            message: TURN_ERROR_MESSAGE.into(),
            error: Some(error.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment_score: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SummaryResponse {
    pub fn ok(summary: String, sentiment_score: u8, qualified: bool) -> Self {
        Self {
            success: true,
            message: Some(SUMMARIZE_OK_MESSAGE.into()),
            summary: Some(summary),
            sentiment_score: Some(sentiment_score),
            qualified: Some(qualified),
            error: None,
        }
    }

    pub fn failed(error: impl ToString) -> Self {
        Self {
            success: false,
            message: None,
            summary: None,
            sentiment_score: None,
            qualified: None,
            error: Some(error.to_string()),
        }
    }
}
