//! Client configuration types for Parley.
//!
//! `ClientConfig` represents `config.toml` in the data directory. All fields
//! have sensible defaults so a missing or partial file never blocks startup.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the Parley client.
///
/// Loaded from `~/.parley/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the backend service.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Delay before a protected view redirects to the entry point when no
    /// session is present, in seconds.
    #[serde(default = "default_redirect_delay_secs")]
    pub redirect_delay_secs: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_request_timeout_secs() -> u64 {
    300
}

fn default_redirect_delay_secs() -> u64 {
    3
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            redirect_delay_secs: default_redirect_delay_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default_values() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.request_timeout_secs, 300);
        assert_eq!(config.redirect_delay_secs, 3);
    }

    #[test]
    fn test_client_config_deserialize_with_defaults() {
        let config: ClientConfig = toml::from_str("").unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.redirect_delay_secs, 3);
    }

    #[test]
    fn test_client_config_deserialize_partial() {
        let config: ClientConfig =
            toml::from_str("base_url = \"https://assist.example.com\"").unwrap();
        assert_eq!(config.base_url, "https://assist.example.com");
        assert_eq!(config.request_timeout_secs, 300);
    }

    #[test]
    fn test_client_config_serde_roundtrip() {
        let config = ClientConfig {
            base_url: "http://localhost:9000".to_string(),
            request_timeout_secs: 30,
            redirect_delay_secs: 5,
        };
        let text = toml::to_string(&config).unwrap();
        let parsed: ClientConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.base_url, "http://localhost:9000");
        assert_eq!(parsed.request_timeout_secs, 30);
        assert_eq!(parsed.redirect_delay_secs, 5);
    }
}
