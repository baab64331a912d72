pub mod openai;

use async_trait::async_trait;
use serde::Serialize;

use crate::model::ChatMessage;

pub use openai::OpenAiClient;

/// Body of a chat-completions call. Sampling values are forwarded untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub top_p: f64,
    pub max_tokens: u32,
    pub model: String,
}

#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Returns the text of the first completion choice.
    async fn complete(&self, request: &CompletionRequest) -> anyhow::Result<String>;
}
