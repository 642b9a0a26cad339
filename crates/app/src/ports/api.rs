//! API port — HTTP access to the collaborator service.

use std::future::Future;

use ledbridge_domain::error::{SubmitError, TransportError};
use serde::de::DeserializeOwned;

/// A response as seen by the use-cases: status code and raw body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// `true` for a 2xx status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Rejected`] with the body text when the status is
    /// not a success, or [`SubmitError::Decode`] when the body is not valid JSON
    /// for `T`.
    pub fn into_json<T: DeserializeOwned>(self) -> Result<T, SubmitError> {
        if !self.is_success() {
            return Err(SubmitError::Rejected {
                status: self.status,
                body: self.body,
            });
        }
        serde_json::from_str(&self.body).map_err(|err| SubmitError::decode(&err))
    }
}

/// Client for the collaborator API.
///
/// Implementations perform exactly one request per call, with no retry and
/// no timeout, and report any failure to obtain a response as a
/// [`TransportError`]. A non-success status is **not** an error at this level.
pub trait ApiClient {
    /// `POST` `body` to `path` with `Content-Type: application/json`.
    fn post_json(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> impl Future<Output = Result<ApiResponse, TransportError>>;

    /// `GET` `path`.
    fn get(&self, path: &str) -> impl Future<Output = Result<ApiResponse, TransportError>>;
}

impl<T: ApiClient> ApiClient for &T {
    fn post_json(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> impl Future<Output = Result<ApiResponse, TransportError>> {
        (**self).post_json(path, body)
    }

    fn get(&self, path: &str) -> impl Future<Output = Result<ApiResponse, TransportError>> {
        (**self).get(path)
    }
}

impl<T: ApiClient> ApiClient for std::rc::Rc<T> {
    fn post_json(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> impl Future<Output = Result<ApiResponse, TransportError>> {
        (**self).post_json(path, body)
    }

    fn get(&self, path: &str) -> impl Future<Output = Result<ApiResponse, TransportError>> {
        (**self).get(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_treat_only_2xx_as_success() {
        assert!(ApiResponse::new(200, "").is_success());
        assert!(ApiResponse::new(201, "").is_success());
        assert!(!ApiResponse::new(302, "").is_success());
        assert!(!ApiResponse::new(400, "").is_success());
        assert!(!ApiResponse::new(500, "").is_success());
    }

    #[test]
    fn should_reject_with_body_text_when_status_is_not_success() {
        let result = ApiResponse::new(400, "bad ip").into_json::<serde_json::Value>();
        assert_eq!(
            result,
            Err(SubmitError::Rejected {
                status: 400,
                body: "bad ip".to_string(),
            })
        );
    }

    #[test]
    fn should_report_decode_error_for_invalid_json() {
        let result = ApiResponse::new(200, "<html>").into_json::<serde_json::Value>();
        assert!(matches!(result, Err(SubmitError::Decode(_))));
    }

    #[test]
    fn should_decode_typed_body() {
        let names: Vec<String> = ApiResponse::new(200, r#"["a","b"]"#).into_json().unwrap();
        assert_eq!(names, vec!["a", "b"]);
    }
}
