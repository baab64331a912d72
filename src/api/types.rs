use serde::{Deserialize, Serialize};

use crate::model::ChatMessage;

pub const DEFAULT_TEMPERATURE: f64 = 1.0;
pub const DEFAULT_TOP_P: f64 = 1.0;
pub const DEFAULT_MAX_TOKENS: u32 = 131_000;

/// Body of `POST /api/data`. Only `messages` is required; unknown fields
/// such as the page's `model` are ignored. An explicit `null` in an optional
/// field is treated like an absent field and gets the default.
#[derive(Debug, Deserialize)]
pub struct DataRequest {
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub system_role: Option<String>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub top_p: Option<f64>,
    #[serde(default)]
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct DataResponse {
    pub html: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
