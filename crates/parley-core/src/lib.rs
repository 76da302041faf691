//! Controllers and trait definitions for the Parley client.
//!
//! This crate defines the "ports" (`BackendApi`, `SessionStore`) that the
//! infrastructure layer implements, plus the controllers that drive the
//! client: auth, live chat, and history. It depends only on `parley-types`
//! -- never on `parley-infra` or any HTTP/IO crate, which is what lets the
//! controllers be tested against in-memory fakes.

pub mod api;
pub mod auth;
pub mod chat;
pub mod history;
pub mod store;
pub mod timer;

#[cfg(test)]
mod test_support;
