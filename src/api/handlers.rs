use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use std::sync::Arc;
use std::time::Instant;

use crate::data_models::ResponseEnvelope;
use crate::error::ValidationError;
use crate::searcher::Searcher;

use super::errors::ApiError;
use super::models::{RawSearchRequest, SearchRequest, StatusResponse};

pub const STATUS_MESSAGE: &str =
    "Google Search MCP Server is running. Send a POST request to /search/ to perform a search.";

pub async fn root_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: STATUS_MESSAGE.to_string(),
    })
}

pub async fn search_handler(
    State(searcher): State<Arc<Searcher>>,
    payload: Result<Json<RawSearchRequest>, JsonRejection>,
) -> Result<Json<ResponseEnvelope>, ApiError> {
    let start = Instant::now();

    let Json(raw) = payload.map_err(|rejection| {
        tracing::warn!("rejected search request body: {}", rejection.body_text());
        ValidationError::MalformedBody(rejection.body_text())
    })?;
    let request = SearchRequest::try_from(raw).inspect_err(|e| {
        tracing::warn!("rejected search request: {e}");
    })?;

    tracing::info!(
        query = %request.query,
        lang_code = %request.lang_code,
        num = request.num,
        full_text = request.full_text,
        "received search request"
    );

    let results = searcher
        .search(
            &request.query,
            &request.lang_code,
            request.num,
            request.full_text,
        )
        .await?;

    tracing::info!(
        count = results.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "search completed"
    );

    Ok(Json(ResponseEnvelope::from_results(results)))
}
