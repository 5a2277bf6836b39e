//! Download handler.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, HeaderValue},
    response::IntoResponse,
};
use serde::Deserialize;
use tokio_util::io::ReaderStream;
use tracing::info;

use super::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DownloadParams {
    #[serde(default)]
    pub url: Option<String>,
}

/// GET /download?url=...
///
/// Runs the whole acquisition before answering, then streams the finished
/// file as an attachment. Any failure is fully cleaned up by the time the
/// error response is built.
pub async fn download(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DownloadParams>,
) -> Result<impl IntoResponse, ApiError> {
    let url = params.url.unwrap_or_default();
    let cancel = state.shutdown_token().child_token();

    let acquired = state
        .acquisition()
        .acquire_with_cancel(&url, cancel)
        .await?;

    info!(
        job_id = %acquired.job.id,
        filename = %acquired.download_name,
        size = acquired.size_bytes,
        "Serving acquired file"
    );

    let disposition = HeaderValue::from_str(&content_disposition(&acquired.download_name))
        .map_err(|e| ApiError::internal(format!("Invalid download name: {}", e)))?;

    let headers = [
        (
            header::CONTENT_TYPE,
            HeaderValue::from_static(acquired.content_type),
        ),
        (header::CONTENT_LENGTH, HeaderValue::from(acquired.size_bytes)),
        (header::CONTENT_DISPOSITION, disposition),
    ];
    let body = Body::from_stream(ReaderStream::new(acquired.file));

    Ok((headers, body))
}

/// Build an `attachment` disposition for `name`.
///
/// ASCII names go out as a plain quoted `filename`. Otherwise the quoted
/// value is an ASCII approximation and the real name is sent as an RFC 5987
/// `filename*` parameter.
pub fn content_disposition(name: &str) -> String {
    let quoted: String = name
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_ascii() && !c.is_ascii_control() => c,
            _ => '_',
        })
        .collect();

    if name.is_ascii() {
        format!("attachment; filename=\"{}\"", quoted)
    } else {
        format!(
            "attachment; filename=\"{}\"; filename*=UTF-8''{}",
            quoted,
            urlencoding::encode(name)
        )
    }
}
