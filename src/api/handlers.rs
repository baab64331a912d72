use anyhow::{anyhow, Context};
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    response::Html,
    Json,
};
use tracing::info;

use super::{
    error::ApiError,
    types::{DataRequest, DataResponse, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, DEFAULT_TOP_P},
    AppState,
};
use crate::{
    conversation::{build_conversation, DEFAULT_SYSTEM_ROLE},
    markdown::render_html,
    upstream::CompletionRequest,
};

const INDEX_HTML: &str = include_str!("../../static/index.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// The body is read and parsed here rather than by extractors so that bad
/// input, including an oversized body, fails the same way an upstream error does.
pub async fn get_response(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<DataResponse>, ApiError> {
    let body = body.context("failed to read request body")?;
    let req: DataRequest = serde_json::from_slice(&body).context("invalid request body")?;
    if req.messages.is_empty() {
        return Err(anyhow!("messages must not be empty").into());
    }

    let request = completion_request(&state, req);
    let count = request.messages.len();

    let markdown = state.client.complete(&request).await?;
    let html = render_html(&markdown);

    info!(messages = count, chars = markdown.len(), "completion rendered");
    Ok(Json(DataResponse { html }))
}

fn completion_request(state: &AppState, req: DataRequest) -> CompletionRequest {
    let system_role = req.system_role.as_deref().unwrap_or(DEFAULT_SYSTEM_ROLE);

    CompletionRequest {
        messages: build_conversation(system_role, &req.messages),
        temperature: req.temperature.unwrap_or(DEFAULT_TEMPERATURE),
        top_p: req.top_p.unwrap_or(DEFAULT_TOP_P),
        max_tokens: req.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
        model: state.config.model.clone(),
    }
}
