// src/infra/errors.rs — Error types for Screenpass

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScreenpassError {
    // Provider errors (never surfaced to the applicant; degraded to a fallback reply)
    #[error("Provider '{provider}' error: {message}")]
    Provider { provider: String, message: String },

    // Session errors
    #[error("Session store error: {0}")]
    SessionStore(String),

    // Infra
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScreenpassError {
    pub fn provider(provider: &str, message: impl Into<String>) -> Self {
        ScreenpassError::Provider {
            provider: provider.to_string(),
            message: message.into(),
        }
    }
}
