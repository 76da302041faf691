//! BackendApi trait definition.
//!
//! The single seam between the controllers and the backend service. The
//! concrete HTTP implementation lives in parley-infra; tests substitute an
//! in-memory fake. Uses native async fn in traits (RPITIT, Rust 2024
//! edition).

use parley_types::chat::Conversation;
use parley_types::error::ApiError;
use parley_types::identity::{Identity, SignInForm, SignUpForm};
use parley_types::session::Session;

/// Request/response contract with the backend assistant service.
///
/// Each method maps to exactly one endpoint and is the sole suspension
/// point of the controller that calls it. No method retries.
pub trait BackendApi: Send + Sync {
    /// Create a new identity (`POST /api/v1/crm/users`).
    ///
    /// The backend acknowledges with the created identity; the client only
    /// needs the acknowledgment -- sign-in is a separate step.
    fn create_identity(
        &self,
        form: &SignUpForm,
    ) -> impl std::future::Future<Output = Result<(), ApiError>> + Send;

    /// Sign in and upload the knowledge base in one multipart request
    /// (`POST /api/v1/crm/login`).
    ///
    /// Callers must validate that `form.file` is present before calling;
    /// the controller treats its absence as a local failure.
    fn sign_in(
        &self,
        form: &SignInForm,
    ) -> impl std::future::Future<Output = Result<Identity, ApiError>> + Send;

    /// Send one user message for the given session (`POST /api/v1/chat/`)
    /// and return the assistant's reply text.
    fn send_message(
        &self,
        session: &Session,
        message: &str,
    ) -> impl std::future::Future<Output = Result<String, ApiError>> + Send;

    /// Fetch all persisted conversations for an identity
    /// (`GET /api/v1/crm/conversations/{user_id}`). No pagination; the
    /// returned order is not trusted by callers.
    fn conversations(
        &self,
        identity_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Conversation>, ApiError>> + Send;
}
