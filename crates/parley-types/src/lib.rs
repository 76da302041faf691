//! Shared domain types for Parley.
//!
//! This crate contains the core domain types used across the Parley client:
//! Identity, Session, chat messages, conversations, and their associated
//! error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror,
//! secrecy.

pub mod chat;
pub mod config;
pub mod error;
pub mod identity;
pub mod session;
