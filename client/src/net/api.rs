//! REST API helpers for communicating with the activities backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! calls are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns a `Result` so the UI can turn each failure into a
//! transient message instead of a panic. Transport and decode failures are
//! kept apart from backend rejections because only rejections carry a
//! server-provided `detail` worth showing verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::ActivityList;
#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorResponse;

/// Collection endpoint for the activity list.
pub const ACTIVITIES_ENDPOINT: &str = "/activities";

/// Endpoint that verifies teacher basic-auth credentials.
pub const TEACHER_AUTH_ENDPOINT: &str = "/auth/teacher";

/// Failure of a single REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, aborted).
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("request rejected: status {status}")]
    Rejected { status: u16, detail: Option<String> },

    /// A 2xx response body could not be decoded.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Text to show the user for this failure.
    ///
    /// Rejections surface the backend `detail` verbatim, or `rejected_fallback`
    /// when there is none. Everything else shows `transport_fallback`.
    #[must_use]
    pub fn user_message(&self, rejected_fallback: &str, transport_fallback: &str) -> String {
        match self {
            Self::Rejected { detail: Some(detail), .. } => detail.clone(),
            Self::Rejected { detail: None, .. } => rejected_fallback.to_owned(),
            Self::Transport(_) | Self::Decode(_) | Self::Unavailable => transport_fallback.to_owned(),
        }
    }
}

/// Path + query for a per-activity roster action (`signup` or `unregister`).
fn roster_endpoint(activity: &str, action: &str, email: &str) -> String {
    format!(
        "{ACTIVITIES_ENDPOINT}/{}/{action}?email={}",
        urlencoding::encode(activity),
        urlencoding::encode(email)
    )
}

/// `POST` target for signing `email` up to `activity`.
#[must_use]
pub fn signup_endpoint(activity: &str, email: &str) -> String {
    roster_endpoint(activity, "signup", email)
}

/// `DELETE` target for removing `email` from `activity`.
#[must_use]
pub fn unregister_endpoint(activity: &str, email: &str) -> String {
    roster_endpoint(activity, "unregister", email)
}

#[cfg(any(test, feature = "hydrate"))]
fn rejection(status: u16, body: Option<ErrorResponse>) -> ApiError {
    ApiError::Rejected { status, detail: body.and_then(|b| b.detail_text()) }
}

#[cfg(feature = "hydrate")]
async fn read_message(resp: gloo_net::http::Response) -> Result<Option<String>, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        return Err(rejection(status, resp.json::<ErrorResponse>().await.ok()));
    }
    let body: super::types::MessageResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(body.message)
}

/// Fetch the full activity collection from `GET /activities`.
///
/// # Errors
///
/// Returns an error if the request fails, the backend rejects it, or the body
/// is not an activity map.
pub async fn fetch_activities() -> Result<ActivityList, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(ACTIVITIES_ENDPOINT)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            return Err(rejection(status, resp.json::<ErrorResponse>().await.ok()));
        }
        resp.json::<ActivityList>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Sign `email` up for `activity` via `POST /activities/{name}/signup`.
/// Returns the backend's confirmation message, if it sent one.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects the signup.
pub async fn signup(activity: &str, email: &str) -> Result<Option<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&signup_endpoint(activity, email))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_message(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (activity, email);
        Err(ApiError::Unavailable)
    }
}

/// Remove `email` from `activity` via `DELETE /activities/{name}/unregister`,
/// authorized by the teacher's `Authorization` header value.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects it.
pub async fn unregister(activity: &str, email: &str, authorization: &str) -> Result<Option<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&unregister_endpoint(activity, email))
            .header("Authorization", authorization)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_message(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (activity, email, authorization);
        Err(ApiError::Unavailable)
    }
}

/// Verify teacher credentials via `GET /auth/teacher`.
///
/// # Errors
///
/// Returns an error if the request fails or the credentials are rejected.
pub async fn verify_teacher(authorization: &str) -> Result<Option<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(TEACHER_AUTH_ENDPOINT)
            .header("Authorization", authorization)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_message(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = authorization;
        Err(ApiError::Unavailable)
    }
}
