//! # ledbridge-domain
//!
//! Pure domain model for the ledbridge pixel-controller client.
//!
//! ## Responsibilities
//! - Define the **raw forms** (device, group, color) as plain records of field text
//! - Define the **payloads** sent to the collaborator API and the rules that
//!   turn form text into them (lenient integer parsing, device-list splitting)
//! - Define the **form kinds** with their fixed paths and acknowledgment phrases
//! - Define the **submission outcome** and its error taxonomy, and the single
//!   step that collapses it into a user-facing message
//! - Define the **catalog** read models returned by the listing endpoints
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod number;

pub mod catalog;
pub mod form;
pub mod form_kind;
pub mod outcome;
pub mod payload;
