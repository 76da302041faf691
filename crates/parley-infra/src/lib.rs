//! Infrastructure layer for Parley.
//!
//! Contains implementations of the traits defined in `parley-core`: the
//! reqwest-backed HTTP backend client and the file-backed session store,
//! plus the config loader.

pub mod config;
pub mod http;
pub mod session_store;

use std::path::PathBuf;

/// Resolve the Parley data directory (`~/.parley`).
///
/// Falls back to a relative `.parley` directory when the home directory
/// cannot be determined (containers, stripped-down environments).
pub fn data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".parley"))
        .unwrap_or_else(|| PathBuf::from(".parley"))
}
