use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{config::Config, upstream::CompletionClient};

pub mod error;
pub mod handlers;
pub mod types;

use handlers::{get_response, index};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: Arc<dyn CompletionClient>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/data", post(get_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
