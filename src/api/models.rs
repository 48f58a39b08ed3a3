use serde::{Deserialize, Serialize};

// A missing field deserializes to the empty string so both "absent" and
// "empty" take the same 400 path in the handlers.

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub content: String,
    pub question: String,
}

#[derive(Debug, Deserialize)]
pub struct ScrapeRequest {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct ScrapeResponse {
    pub content: String,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
