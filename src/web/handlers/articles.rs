// GET /?urls=a,b,c — score a comma-separated list of articles.
//
// Returns 400 if more than MAX_URLS_PER_REQUEST URLs are given. Otherwise
// returns 200 with {"urls": [outcome, ...]}; individual article failures
// are reported per outcome, never as an HTTP error.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::processing::models::ProcessingOutcome;
use crate::web::{api_error, AppState};

pub const MAX_URLS_PER_REQUEST: usize = 10;

#[derive(Deserialize, Default)]
pub struct ArticlesQuery {
    /// Comma-separated article URLs
    pub urls: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct ArticlesResponse {
    pub urls: Vec<ProcessingOutcome>,
}

/// Split the `urls` parameter. URLs are passed through untouched; a missing
/// parameter counts as one empty URL, which the pipeline reports as
/// unsupported.
pub fn split_urls(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::to_string)
        .collect()
}

pub async fn process_articles(
    State(state): State<AppState>,
    Query(params): Query<ArticlesQuery>,
) -> Response {
    let urls = split_urls(params.urls.as_deref());
    if urls.len() > MAX_URLS_PER_REQUEST {
        return api_error(
            StatusCode::BAD_REQUEST,
            "too many urls in request, should be 10 or less",
        );
    }

    let outcomes = state
        .analyzer
        .process_all(&urls, state.charged_words.clone())
        .await;

    Json(ArticlesResponse { urls: outcomes }).into_response()
}
