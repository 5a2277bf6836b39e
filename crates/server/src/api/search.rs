//! Search handler.

use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;
use tubetag_core::{SearchOutcome, SearchRequest};

use super::error::ApiError;
use crate::state::AppState;

/// POST /search
///
/// Body: `{"query": "...", "max_results": 10}`. The body is parsed by hand so
/// that malformed input still gets the `{"error": ...}` shape.
pub async fn search(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<SearchOutcome>, ApiError> {
    let value: Value = serde_json::from_slice(&body)
        .map_err(|e| ApiError::bad_request(format!("Invalid JSON body: {}", e)))?;

    let request = SearchRequest::from_json(&value)?;
    let outcome = state.search().search(&request).await?;

    Ok(Json(outcome))
}
