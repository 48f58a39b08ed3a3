use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

use crate::jina::JinaClient;

use super::models::{
    ErrorResponse, ScrapeRequest, ScrapeResponse, SearchRequest, SearchResponse,
};

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(message: &str) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

pub async fn search_handler(
    State(jina): State<Arc<JinaClient>>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    if request.question.trim().is_empty() {
        return Err(bad_request("question is required"));
    }

    let content = jina.scrape_question(&request.question).await.map_err(|e| {
        tracing::error!("search forward failed: {e}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })?;

    Ok(Json(SearchResponse {
        content,
        question: request.question,
    }))
}

pub async fn scrape_handler(
    State(jina): State<Arc<JinaClient>>,
    Json(request): Json<ScrapeRequest>,
) -> Result<Json<ScrapeResponse>, ApiError> {
    if request.url.trim().is_empty() {
        return Err(bad_request("url is required"));
    }

    let content = jina.scrape_url(&request.url).await.map_err(|e| {
        tracing::error!("scrape forward failed: {e}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })?;

    Ok(Json(ScrapeResponse {
        content,
        url: request.url,
    }))
}
