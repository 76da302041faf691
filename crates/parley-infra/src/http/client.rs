//! HttpBackend -- concrete [`BackendApi`] implementation over reqwest.
//!
//! Maps each trait method to one REST endpoint and normalizes failures into
//! the client's error taxonomy: non-2xx with a structured `{detail}` body
//! surfaces the reason verbatim, unparseable bodies degrade to a generic
//! explanation, and transport failures carry the underlying error text.
//!
//! Passwords arrive wrapped in [`secrecy::SecretString`] and are exposed
//! only while the outgoing request body is built.

use std::time::Duration;

use secrecy::ExposeSecret;

use parley_core::api::BackendApi;
use parley_types::chat::Conversation;
use parley_types::config::ClientConfig;
use parley_types::error::ApiError;
use parley_types::identity::{Identity, SignInForm, SignUpForm};
use parley_types::session::Session;

use super::types::{ChatRequest, ChatResponse, CreateUserRequest, ErrorBody};

/// HTTP client for the assistant backend.
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a backend client from the loaded configuration.
    pub fn new(config: &ClientConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    #[allow(dead_code)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Build the full API URL for a given path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn a non-2xx response into an [`ApiError`].
    ///
    /// Extracts the server-supplied `{detail}` when present; an
    /// unparseable failure body degrades to the generic explanation.
    async fn reject(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        match response.json::<ErrorBody>().await {
            Ok(body) => ApiError::Rejected {
                status,
                detail: body.detail,
            },
            Err(_) => {
                tracing::debug!(status, "failure response without structured detail");
                ApiError::Malformed
            }
        }
    }
}

fn network(err: reqwest::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

impl BackendApi for HttpBackend {
    async fn create_identity(&self, form: &SignUpForm) -> Result<(), ApiError> {
        let body = CreateUserRequest {
            email: form.email.clone(),
            name: form.name.clone(),
            company: form.company.clone(),
            password: form.password.expose_secret().to_string(),
        };

        let response = self
            .client
            .post(self.url("/api/v1/crm/users"))
            .json(&body)
            .send()
            .await
            .map_err(network)?;

        if !response.status().is_success() {
            return Err(Self::reject(response).await);
        }
        Ok(())
    }

    async fn sign_in(&self, form: &SignInForm) -> Result<Identity, ApiError> {
        // The controller validates file presence; an absent file here is a
        // programming error, reported as a malformed request rather than
        // a panic.
        let Some(file) = &form.file else {
            return Err(ApiError::Malformed);
        };

        let part = reqwest::multipart::Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone());
        let multipart = reqwest::multipart::Form::new()
            .text("email", form.email.clone())
            .text("password", form.password.expose_secret().to_string())
            .part("file", part);

        let response = self
            .client
            .post(self.url("/api/v1/crm/login"))
            .multipart(multipart)
            .send()
            .await
            .map_err(network)?;

        if !response.status().is_success() {
            return Err(Self::reject(response).await);
        }

        response.json::<Identity>().await.map_err(|err| {
            tracing::debug!(error = %err, "unparseable login response");
            ApiError::Malformed
        })
    }

    async fn send_message(&self, session: &Session, message: &str) -> Result<String, ApiError> {
        let body = ChatRequest {
            user_id: session.identity_id.clone(),
            session_id: session.token.clone(),
            message: message.to_string(),
        };

        let response = self
            .client
            .post(self.url("/api/v1/chat/"))
            .json(&body)
            .send()
            .await
            .map_err(network)?;

        if !response.status().is_success() {
            return Err(Self::reject(response).await);
        }

        let chat: ChatResponse = response.json().await.map_err(|err| {
            tracing::debug!(error = %err, "unparseable chat response");
            ApiError::Malformed
        })?;
        Ok(chat.response)
    }

    async fn conversations(&self, identity_id: &str) -> Result<Vec<Conversation>, ApiError> {
        let response = self
            .client
            .get(self.url(&format!("/api/v1/crm/conversations/{identity_id}")))
            .send()
            .await
            .map_err(network)?;

        if !response.status().is_success() {
            return Err(Self::reject(response).await);
        }

        response.json::<Vec<Conversation>>().await.map_err(|err| {
            tracing::debug!(error = %err, "unparseable conversations response");
            ApiError::Malformed
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_backend() -> HttpBackend {
        HttpBackend::new(&ClientConfig::default())
    }

    #[test]
    fn test_url_building() {
        let backend = make_backend();
        assert_eq!(
            backend.url("/api/v1/chat/"),
            "http://127.0.0.1:8000/api/v1/chat/"
        );
    }

    #[test]
    fn test_base_url_override_trims_trailing_slash() {
        let backend = make_backend().with_base_url("http://localhost:9000/".to_string());
        assert_eq!(
            backend.url("/api/v1/crm/users"),
            "http://localhost:9000/api/v1/crm/users"
        );
    }

    #[test]
    fn test_conversations_path_embeds_identity() {
        let backend = make_backend();
        assert_eq!(
            backend.url(&format!("/api/v1/crm/conversations/{}", "u-42")),
            "http://127.0.0.1:8000/api/v1/crm/conversations/u-42"
        );
    }
}
