pub mod errors;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::RelayConfig;
use crate::llm::OpenAIClient;

#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<OpenAIClient>,
    pub default_model: String,
}

pub fn create_app_state(config: &RelayConfig) -> AppState {
    AppState {
        upstream: Arc::new(OpenAIClient::new(config)),
        default_model: config.default_model.clone(),
    }
}

pub fn build_router(state: AppState) -> Router {
    // Wildcard CORS: the relay fronts a browser quiz client.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", axum::routing::get(routes::health::health_check))
        .route("/api/openai", axum::routing::post(routes::chat::relay_chat))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
