//! [`ApiClient`] implementation over `reqwest`.

use std::future::Future;

use ledbridge_app::ports::{ApiClient, ApiResponse};
use ledbridge_domain::error::TransportError;

use crate::config::HttpConfig;
use crate::error::HttpError;

/// Collaborator API client backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ReqwestApiClient {
    /// Build a client for the API at `config.base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidBaseUrl`] if the URL does not parse or is
    /// not `http`/`https`, or [`HttpError::Build`] if the TLS backend cannot
    /// be initialised.
    pub fn new(config: &HttpConfig) -> Result<Self, HttpError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        match reqwest::Url::parse(&base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => return Err(HttpError::InvalidBaseUrl(config.base_url.clone())),
        }
        let http = reqwest::Client::builder()
            .build()
            .map_err(HttpError::Build)?;
        Ok(Self { http, base_url })
    }

    /// The normalized base URL (no trailing slash).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<ApiResponse, HttpError> {
        let response = request.send().await.map_err(HttpError::Request)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(HttpError::Request)?;
        tracing::debug!(status, body_len = body.len(), "response received");
        Ok(ApiResponse { status, body })
    }
}

impl ApiClient for ReqwestApiClient {
    fn post_json(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> impl Future<Output = Result<ApiResponse, TransportError>> {
        let url = self.url(path);
        async move {
            tracing::debug!(%url, "POST");
            let request = self.http.post(&url).json(&body);
            self.execute(request).await.map_err(HttpError::into_transport)
        }
    }

    fn get(&self, path: &str) -> impl Future<Output = Result<ApiResponse, TransportError>> {
        let url = self.url(path);
        async move {
            tracing::debug!(%url, "GET");
            let request = self.http.get(&url);
            self.execute(request).await.map_err(HttpError::into_transport)
        }
    }
}
