//! Pass-through routes to the activities backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser calls `/activities...` and `/auth/teacher` on the page's own
//! origin. These handlers replay each call against `BACKEND_URL` with the
//! same method, path, query and `Authorization` header, and hand the status
//! and body back untouched so the client sees the backend's own
//! `{message}` / `{detail}` payloads.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{OriginalUri, State};
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::{info, warn};

use crate::state::AppState;

/// Detail text returned when the backend cannot be reached.
pub const BACKEND_UNAVAILABLE: &str = "Backend unavailable.";

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The backend request failed before a full response was read.
    #[error("backend request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        warn!(error = %self, "backend pass-through failed");
        (StatusCode::BAD_GATEWAY, Json(serde_json::json!({ "detail": BACKEND_UNAVAILABLE }))).into_response()
    }
}

/// Forward the current request to the backend.
///
/// # Errors
///
/// Returns [`ProxyError::Upstream`] (rendered as 502) if the backend is
/// unreachable, times out, or drops the response body.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
) -> Result<Response, ProxyError> {
    let path = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    let url = state.backend_url(path);

    let mut request = state.http.request(method.clone(), &url);
    if let Some(auth) = headers.get(AUTHORIZATION) {
        request = request.header(AUTHORIZATION, auth.clone());
    }

    let upstream = request.send().await?;
    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let body: Bytes = upstream.bytes().await?;

    info!(%method, path = uri.path(), status = status.as_u16(), "forwarded");

    let mut response = (status, body).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(CONTENT_TYPE, content_type);
    }
    Ok(response)
}
