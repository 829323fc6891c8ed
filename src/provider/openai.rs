// src/provider/openai.rs — OpenAI Chat Completions provider

use async_trait::async_trait;
use std::time::Duration;

use super::{ChatRequest, ChatResponse, ModelProvider};
use crate::infra::errors::ScreenpassError;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

pub struct OpenAIProvider {
    api_key: String,
    client: reqwest::Client,
    base_url: String,
}

impl OpenAIProvider {
    pub fn with_base_url(api_key: String, base_url: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            api_key,
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ModelProvider for OpenAIProvider {
    fn id(&self) -> &str {
        "openai"
    }

    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, ScreenpassError> {
        let mut body = serde_json::json!({
            "model": request.model,
            "messages": request.messages,
        });

        if let Some(max_tokens) = request.max_tokens {
            body["max_tokens"] = serde_json::json!(max_tokens);
        }
        if let Some(temp) = request.temperature {
            body["temperature"] = serde_json::json!(temp);
        }

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| ScreenpassError::provider("openai", e.to_string()))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let error_body = response.text().await.unwrap_or_default();
            return Err(ScreenpassError::provider(
                "openai",
                format!("HTTP {}: {}", status, error_body),
            ));
        }

        let resp: serde_json::Value = response.json().await.map_err(|e| {
            ScreenpassError::provider("openai", format!("Failed to parse response: {}", e))
        })?;

        let content = resp["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| {
                ScreenpassError::provider("openai", "Response has no choices[0].message.content")
            })?
            .to_string();

        Ok(ChatResponse { content })
    }
}
