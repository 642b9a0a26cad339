//! Error types shared across the workspace.
//!
//! Every failure of a submission ends up as a [`SubmitError`]. Its `Display`
//! is the raw message text only, because that text is what the user sees
//! after the failure label of the form.

/// The request never produced a response (connection refused, DNS failure,
/// aborted fetch, …).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    /// Wrap the text of an underlying client error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The underlying error text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Why a submission (or a listing request) failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The payload could not be serialized.
    #[error("{0}")]
    Encode(String),

    /// Network-level failure, no response was received.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The collaborator answered with a non-success status.
    #[error("{body}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body read as text.
        body: String,
    },

    /// A success status came back but the body is not valid JSON.
    #[error("{0}")]
    Decode(String),
}

impl SubmitError {
    /// Build a [`SubmitError::Decode`] from a `serde_json` error.
    #[must_use]
    pub fn decode(err: &serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
