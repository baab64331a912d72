use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::{CompletionClient, CompletionRequest};
use crate::config::Config;

/// Chat-completions client for OpenAI-compatible endpoints.
#[derive(Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    url: String,
    token: String,
}

impl OpenAiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: format!("{}/chat/completions", config.endpoint.trim_end_matches('/')),
            token: config.token.clone(),
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        debug!(url = %self.url, model = %request.model, "calling completion API");

        let response = self
            .client
            .post(&self.url)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {}", self.token),
            )
            .json(request)
            .send()
            .await
            .context("completion request failed")?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(anyhow!("completion API returned {status}: {text}"));
        }

        let body: ChatCompletion = response
            .json()
            .await
            .context("completion API returned an unreadable body")?;
        first_choice_text(body)
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

fn first_choice_text(body: ChatCompletion) -> Result<String> {
    body.choices
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("completion API returned no choices"))?
        .message
        .content
        .ok_or_else(|| anyhow!("completion API returned a choice without content"))
}
