//! # ledbridge-adapter-http-reqwest
//!
//! Native HTTP adapter built on [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Implement the `ApiClient` port: one request per call, JSON bodies with
//!   `Content-Type: application/json`, response status and body text handed
//!   back untouched
//! - Resolve endpoint paths against a configured base URL
//! - Convert client failures into the domain's `TransportError`
//!
//! ## Dependency rule
//! Depends on `ledbridge-app` (for the port trait) and `ledbridge-domain`
//! (for error types). Never leaks reqwest types into the domain.

pub mod client;
pub mod config;
pub mod error;

pub use client::ReqwestApiClient;
pub use config::HttpConfig;
pub use error::HttpError;
