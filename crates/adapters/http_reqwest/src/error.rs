//! HTTP adapter error types.

use ledbridge_domain::error::TransportError;

/// Errors specific to the reqwest adapter.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The configured base URL cannot be parsed or is not http(s).
    #[error("invalid base URL {0:?}")]
    InvalidBaseUrl(String),

    /// The reqwest client could not be built.
    #[error("failed to build HTTP client")]
    Build(#[source] reqwest::Error),

    /// Sending the request or reading its body failed.
    #[error("{0}")]
    Request(#[source] reqwest::Error),
}

impl HttpError {
    /// Convert into a [`TransportError`] for propagation across the port
    /// boundary. Only the error text survives.
    #[must_use]
    pub fn into_transport(self) -> TransportError {
        match self {
            Self::Request(err) => TransportError::new(describe(&err)),
            other => TransportError::new(other.to_string()),
        }
    }
}

impl From<HttpError> for TransportError {
    fn from(err: HttpError) -> Self {
        err.into_transport()
    }
}

/// Text of a reqwest error including its innermost cause, e.g.
/// `error sending request for url (…): Connection refused (os error 111)`.
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    let mut last = None;
    while let Some(cause) = source {
        last = Some(cause.to_string());
        source = cause.source();
    }
    if let Some(cause) = last {
        message.push_str(": ");
        message.push_str(&cause);
    }
    message
}
