//! # ledbridge-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `ApiClient` — HTTP access to the collaborator API
//!   - `FieldSource` — current text of the bound input fields
//!   - `Notifier` — one acknowledgment per submission
//! - Define **use-cases**:
//!   - `FormBridge` — submit the device, group and color forms
//!   - `CatalogService` — list registered devices and groups
//!
//! ## Dependency rule
//! Depends on `ledbridge-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.
//!
//! ## Scheduling
//! Port futures are not required to be `Send`. Every front end drives the
//! use-cases from a single-threaded cooperative loop (the browser event loop,
//! or a current-thread tokio runtime).

pub mod ports;
pub mod services;
