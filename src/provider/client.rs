// src/provider/client.rs — Never-failing LLM facade used by the orchestrator

use std::sync::Arc;

use super::canned::CannedProvider;
use super::openai::OpenAIProvider;
use super::{ChatRequest, Message, ModelProvider};
use crate::infra::config::LlmSettings;
use crate::roles::types::PLACEHOLDER_API_KEY;
use crate::util::truncate_str;

/// Returned whenever the provider call fails for any reason.
pub const FALLBACK_REPLY: &str =
    "I'm sorry, I'm having some technical difficulties. Please try again in a moment.";

/// Keys this short are treated as unset.
const MIN_REAL_KEY_CHARS: usize = 11;

/// True when `api_key` looks like a real credential.
pub fn is_real_api_key(api_key: &str) -> bool {
    api_key != PLACEHOLDER_API_KEY && api_key.chars().count() >= MIN_REAL_KEY_CHARS
}

#[derive(Clone)]
pub struct LlmClient {
    provider: Arc<dyn ModelProvider>,
    model: String,
    max_tokens: u32,
    temperature: f64,
}

impl LlmClient {
    /// Pick the OpenAI provider for a real key, the canned provider otherwise.
    pub fn from_settings(api_key: &str, settings: &LlmSettings) -> Self {
        let provider: Arc<dyn ModelProvider> = if is_real_api_key(api_key) {
            Arc::new(OpenAIProvider::with_base_url(
                api_key.to_string(),
                settings.base_url.clone(),
                settings.timeout(),
            ))
        } else {
            tracing::info!("Using canned replies (API key is the placeholder or too short)");
            Arc::new(CannedProvider)
        };
        Self::with_provider(provider, settings)
    }

    pub fn with_provider(provider: Arc<dyn ModelProvider>, settings: &LlmSettings) -> Self {
        Self {
            provider,
            model: settings.model.clone(),
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
        }
    }

    pub fn provider_id(&self) -> &str {
        self.provider.id()
    }

    /// Send one system + user exchange. Errors degrade to [`FALLBACK_REPLY`].
    pub async fn complete(&self, prompt: &str, system_prompt: &str) -> String {
        tracing::debug!("LLM prompt: {}...", truncate_str(prompt, 100));
        tracing::debug!("LLM system prompt: {}...", truncate_str(system_prompt, 200));

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![Message::system(system_prompt), Message::user(prompt)],
            max_tokens: Some(self.max_tokens),
            temperature: Some(self.temperature),
        };

        match self.provider.chat(request).await {
            Ok(resp) => {
                tracing::debug!(provider = self.provider.id(), "LLM call succeeded");
                resp.content
            }
            Err(e) => {
                tracing::warn!(provider = self.provider.id(), "LLM call failed: {}", e);
                FALLBACK_REPLY.to_string()
            }
        }
    }
}
