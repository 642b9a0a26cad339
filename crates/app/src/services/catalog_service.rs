//! Catalog service — lists what the collaborator has registered.

use ledbridge_domain::catalog::{DeviceInfo, GroupInfo};
use ledbridge_domain::error::SubmitError;

use crate::ports::ApiClient;

/// Application service for the listing endpoints.
pub struct CatalogService<C> {
    client: C,
}

impl<C: ApiClient> CatalogService<C> {
    /// Create a new service backed by the given client.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// List all registered devices.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Transport`] when no response is received,
    /// [`SubmitError::Rejected`] on a non-success status, or
    /// [`SubmitError::Decode`] when the body is not a device list.
    #[tracing::instrument(skip(self))]
    pub async fn list_devices(&self) -> Result<Vec<DeviceInfo>, SubmitError> {
        self.client.get("/devices").await?.into_json()
    }

    /// List all groups with their member devices.
    ///
    /// # Errors
    ///
    /// Same as [`list_devices`](Self::list_devices).
    #[tracing::instrument(skip(self))]
    pub async fn list_groups(&self) -> Result<Vec<GroupInfo>, SubmitError> {
        self.client.get("/groups").await?.into_json()
    }
}
