//! Identity and authentication form types for Parley.
//!
//! An `Identity` is an account recognized by the backend. It is created once
//! by sign-up and only referenced afterwards; the client never mutates it.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// An authenticated user account as returned by the backend.
///
/// Issued by sign-up (`POST /api/v1/crm/users`) and echoed back on every
/// successful sign-in. Immutable from the client's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    /// Backend-assigned identity id. Opaque string; used as the key for
    /// all subsequent chat and history requests.
    pub id: String,
    pub email: String,
    /// Display name shown in CLI output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

impl Identity {
    /// Name to greet the user with: display name when present, email otherwise.
    pub fn greeting_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

/// Input for the sign-up operation.
///
/// No knowledge-base file is required at sign-up; the upload happens on
/// sign-in. The password is wrapped in [`SecretString`] so it never appears
/// in Debug output or logs; it is exposed only when the request body is built.
pub struct SignUpForm {
    pub email: String,
    pub name: String,
    pub company: Option<String>,
    pub password: SecretString,
}

/// Input for the sign-in operation.
///
/// The knowledge-base file is required: its absence is a local validation
/// failure surfaced before any network call.
pub struct SignInForm {
    pub email: String,
    pub password: SecretString,
    pub file: Option<KnowledgeFile>,
}

/// The knowledge-base document uploaded alongside sign-in credentials.
///
/// The backend reindexes its knowledge base from this file on every login,
/// so re-submission is deliberately not deduplicated.
#[derive(Debug, Clone)]
pub struct KnowledgeFile {
    /// Original file name, forwarded as the multipart part's file name.
    pub file_name: String,
    pub bytes: Vec<u8>,
}
