use axum::{Router, routing::post};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::jina::JinaClient;

pub mod handlers;
pub mod models;

pub fn create_router(jina: Arc<JinaClient>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/search", post(handlers::search_handler))
        .route("/scrape", post(handlers::scrape_handler))
        .with_state(jina)
        .layer(cors)
}
