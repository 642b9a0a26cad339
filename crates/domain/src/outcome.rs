//! Submission outcome — the tagged result of one form submission.
//!
//! The error taxonomy is kept intact up to this point. [`SubmitOutcome::message`]
//! is the one place where it collapses into the single string shown to the
//! user.

use std::fmt;

use crate::error::SubmitError;
use crate::form_kind::FormKind;

/// Result of submitting one form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    kind: FormKind,
    result: Result<(), SubmitError>,
}

impl SubmitOutcome {
    /// The collaborator accepted the request.
    #[must_use]
    pub fn success(kind: FormKind) -> Self {
        Self {
            kind,
            result: Ok(()),
        }
    }

    /// The submission failed for `error`.
    #[must_use]
    pub fn failure(kind: FormKind, error: SubmitError) -> Self {
        Self {
            kind,
            result: Err(error),
        }
    }

    #[must_use]
    pub fn kind(&self) -> FormKind {
        self.kind
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// The failure cause, if any.
    #[must_use]
    pub fn error(&self) -> Option<&SubmitError> {
        self.result.as_ref().err()
    }

    /// The acknowledgment text: a fixed phrase on success, otherwise the
    /// form's failure label followed by the raw error text.
    #[must_use]
    pub fn message(&self) -> String {
        match &self.result {
            Ok(()) => self.kind.success_message().to_string(),
            Err(err) => format!("{}{err}", self.kind.failure_label()),
        }
    }
}

impl From<(FormKind, Result<(), SubmitError>)> for SubmitOutcome {
    fn from((kind, result): (FormKind, Result<(), SubmitError>)) -> Self {
        Self { kind, result }
    }
}

impl fmt::Display for SubmitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
