//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one pooled `reqwest::Client` for all forwarded calls plus the
//! backend base URL. Handlers keep no other state.

use std::sync::Arc;

use crate::config::{ConfigError, HostConfig};

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    backend_url: Arc<str>,
}

impl AppState {
    /// Build state from parsed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &HostConfig) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(config.backend_timeout)
            .connect_timeout(config.backend_timeout)
            .build()
            .map_err(|e| ConfigError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, backend_url: Arc::from(config.backend_url.as_str()) })
    }

    /// Absolute backend URL for a request path (with optional query).
    #[must_use]
    pub fn backend_url(&self, path_and_query: &str) -> String {
        format!("{}{path_and_query}", self.backend_url)
    }
}
