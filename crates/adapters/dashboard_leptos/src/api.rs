//! [`ApiClient`] implementation wrapping `gloo-net` (browser `fetch`).

use std::future::Future;

use gloo_net::http::{Request, Response};
use ledbridge_app::ports::{ApiClient, ApiResponse};
use ledbridge_domain::error::TransportError;

/// Same-origin API client.
#[derive(Debug, Clone, Default)]
pub struct GlooApiClient {
    /// Prefix for every path; empty for same-origin requests.
    base_url: String,
}

impl GlooApiClient {
    /// Client for an API hosted somewhere else than the page.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

fn transport(err: gloo_net::Error) -> TransportError {
    TransportError::new(err.to_string())
}

/// Read status and body text. A failure to read the body counts as a
/// transport failure.
async fn read(response: Response) -> Result<ApiResponse, TransportError> {
    let status = response.status();
    let body = response.text().await.map_err(transport)?;
    Ok(ApiResponse { status, body })
}

impl ApiClient for GlooApiClient {
    fn post_json(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> impl Future<Output = Result<ApiResponse, TransportError>> {
        let url = self.url(path);
        async move {
            let response = Request::post(&url)
                .header("Content-Type", "application/json")
                .body(body.to_string())
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            read(response).await
        }
    }

    fn get(&self, path: &str) -> impl Future<Output = Result<ApiResponse, TransportError>> {
        let url = self.url(path);
        async move {
            let response = Request::get(&url).send().await.map_err(transport)?;
            read(response).await
        }
    }
}
