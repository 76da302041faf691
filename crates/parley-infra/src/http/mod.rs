//! HTTP implementation of the backend contract.
//!
//! [`HttpBackend`] implements the [`BackendApi`](parley_core::api::BackendApi)
//! trait against the assistant service's REST endpoints.

pub mod client;
pub mod types;

pub use client::HttpBackend;
