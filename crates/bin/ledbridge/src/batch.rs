//! Batch submissions — several forms read from one TOML file.
//!
//! ```toml
//! [[device]]
//! name = "porch"
//! ip = "192.168.1.40"
//! port = 6454
//! pixels = "60"
//!
//! [[group]]
//! name = "outside"
//! devices = "porch"
//!
//! [[color]]
//! group = "outside"
//! r = 255
//! g = 120
//! b = 0
//! ```
//!
//! Field values are form text, exactly as typed into the dashboard. Numeric
//! fields may also be written as bare TOML numbers. All
//! submissions run concurrently on the current thread; they are not ordered,
//! so a color submission may reach the API before the group it targets.

use std::path::Path;

use futures::FutureExt;
use futures::future::{LocalBoxFuture, join_all};
use ledbridge_app::ports::{ApiClient, Notifier};
use ledbridge_app::services::form_bridge::FormBridge;
use ledbridge_domain::form::{ColorForm, DeviceForm, GroupForm};
use ledbridge_domain::outcome::SubmitOutcome;
use serde::Deserialize;

/// Forms to submit, grouped by kind.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Batch {
    pub device: Vec<DeviceForm>,
    pub group: Vec<GroupForm>,
    pub color: Vec<ColorForm>,
}

/// Batch file errors.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("failed to read batch file")]
    Io(#[from] std::io::Error),
    #[error("failed to parse batch file")]
    Parse(#[from] toml::de::Error),
}

impl Batch {
    /// Read a batch file.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError`] if the file cannot be read or is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, BatchError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Number of forms in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.device.len() + self.group.len() + self.color.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Start every submission at once and wait for all of them.
    ///
    /// Outcomes are returned in file order (devices, groups, colors), which
    /// says nothing about the order in which the requests completed.
    pub async fn submit_all<C: ApiClient, N: Notifier>(
        self,
        bridge: &FormBridge<C, N>,
    ) -> Vec<SubmitOutcome> {
        let mut submissions: Vec<LocalBoxFuture<'_, SubmitOutcome>> = Vec::with_capacity(self.len());
        submissions.extend(
            self.device
                .into_iter()
                .map(|form| bridge.submit_device(form).boxed_local()),
        );
        submissions.extend(
            self.group
                .into_iter()
                .map(|form| bridge.submit_group(form).boxed_local()),
        );
        submissions.extend(
            self.color
                .into_iter()
                .map(|form| bridge.submit_color(form).boxed_local()),
        );
        tracing::debug!(count = submissions.len(), "submitting batch");
        join_all(submissions).await
    }
}
