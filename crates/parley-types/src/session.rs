//! Client-held session pair and session-token synthesis.
//!
//! A `Session` correlates an identity with a client-generated token for the
//! current chat activity. The token is opaque to the backend: it groups
//! messages into conversations but is never validated, so it carries
//! traceability, not access control.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The client-held (identity id, session token) pair.
///
/// Created exactly once per successful sign-in and destroyed on logout or
/// detected absence on a protected view. A stored pair with either half
/// empty is treated as absent, never as a degraded session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub identity_id: String,
    pub token: String,
}

impl Session {
    /// Create a session for an identity with a freshly generated token.
    pub fn new(identity_id: String) -> Self {
        Self {
            identity_id,
            token: generate_token(),
        }
    }

    /// Whether both halves are present and non-empty.
    pub fn is_complete(&self) -> bool {
        !self.identity_id.is_empty() && !self.token.is_empty()
    }
}

/// Synthesize a new session token from the current time and a random component.
///
/// Format: `session_{unix_millis}_{uuid-v7 simple}`. Generated client-side
/// on every successful sign-in; the backend uses it only as a correlation
/// key for conversation grouping.
pub fn generate_token() -> String {
    format!(
        "session_{}_{}",
        Utc::now().timestamp_millis(),
        Uuid::now_v7().simple()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_token_format() {
        let token = generate_token();
        assert!(token.starts_with("session_"));
        let parts: Vec<&str> = token.splitn(3, '_').collect();
        assert_eq!(parts.len(), 3);
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), 32);
    }

    #[test]
    fn test_generate_token_unique() {
        let a = generate_token();
        let b = generate_token();
        assert_ne!(a, b);
    }

    #[test]
    fn test_session_new_is_complete() {
        let session = Session::new("u-1".to_string());
        assert_eq!(session.identity_id, "u-1");
        assert!(session.is_complete());
    }

    #[test]
    fn test_session_partial_is_incomplete() {
        let session = Session {
            identity_id: "u-1".to_string(),
            token: String::new(),
        };
        assert!(!session.is_complete());

        let session = Session {
            identity_id: String::new(),
            token: generate_token(),
        };
        assert!(!session.is_complete());
    }

    #[test]
    fn test_session_toml_roundtrip() {
        let session = Session::new("u-42".to_string());
        let text = toml::to_string(&session).unwrap();
        let parsed: Session = toml::from_str(&text).unwrap();
        assert_eq!(parsed, session);
    }
}
