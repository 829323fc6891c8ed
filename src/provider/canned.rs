// src/provider/canned.rs — Offline provider used when no real credential is configured

use async_trait::async_trait;

use super::{ChatRequest, ChatResponse, ModelProvider};
use crate::infra::errors::ScreenpassError;

/// Fixed replies; the request content is ignored.
pub const CANNED_REPLIES: [&str; 8] = [
    "Hi there! I'm excited to help you explore this trucking opportunity. Let me ask you a few questions to see if this might be a good fit.",
    "That's great! Can you tell me about your CDL and driving experience?",
    "Excellent! How many years of driving experience do you have?",
    "Perfect! Are you comfortable being on the road for several nights per week?",
    "Thank you for sharing that information. Based on what you've told me, I think you'd be a great fit for this position!",
    "I appreciate your interest. Let me tell you more about the benefits and compensation for this role.",
    "Do you have any questions about the company or the position?",
    "That's a great question! Let me provide you with those details.",
];

pub struct CannedProvider;

#[async_trait]
impl ModelProvider for CannedProvider {
    fn id(&self) -> &str {
        "canned"
    }

    async fn chat(&self, _request: ChatRequest) -> Result<ChatResponse, ScreenpassError> {
        let reply = CANNED_REPLIES[random_index(CANNED_REPLIES.len())];
        Ok(ChatResponse {
            content: reply.to_string(),
        })
    }
}

/// Uniform-enough index in `0..len` from the OS RNG, clock nanos if that fails.
fn random_index(len: usize) -> usize {
    let mut buf = [0u8; 8];
    let seed = match getrandom::getrandom(&mut buf) {
        Ok(()) => u64::from_le_bytes(buf),
        Err(_) => std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.subsec_nanos() as u64)
            .unwrap_or(0),
    };
    (seed % len as u64) as usize
}
