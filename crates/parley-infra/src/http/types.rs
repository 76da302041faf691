//! Wire types for the backend REST API.
//!
//! These are the HTTP request/response shapes of the assistant service's
//! endpoints. They are NOT the domain types from parley-types -- field
//! names here follow the backend's snake_case contract exactly.

use serde::{Deserialize, Serialize};

/// Body for `POST /api/v1/crm/users` (sign-up).
#[derive(Debug, Clone, Serialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub password: String,
}

/// Body for `POST /api/v1/chat/`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub user_id: String,
    pub session_id: String,
    pub message: String,
}

/// Success body of `POST /api/v1/chat/`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Structured reason attached to non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_request_shape() {
        let req = CreateUserRequest {
            email: "a@b.com".to_string(),
            name: "Ada".to_string(),
            company: None,
            password: "hunter2".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["email"], "a@b.com");
        assert!(json.get("company").is_none());
    }

    #[test]
    fn test_chat_request_uses_backend_field_names() {
        let req = ChatRequest {
            user_id: "u-1".to_string(),
            session_id: "session_1_a".to_string(),
            message: "Hello".to_string(),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"user_id\""));
        assert!(json.contains("\"session_id\""));
        assert!(json.contains("\"message\""));
    }

    #[test]
    fn test_error_body_parse() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail": "Login failed."}"#).unwrap();
        assert_eq!(body.detail, "Login failed.");
    }

    #[test]
    fn test_chat_response_parse() {
        let body: ChatResponse = serde_json::from_str(r#"{"response": "Hi there"}"#).unwrap();
        assert_eq!(body.response, "Hi there");
    }
}
