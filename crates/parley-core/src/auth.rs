//! Auth controller: sign-up and sign-in flows.
//!
//! Drives the `idle -> submitting -> {success | failed} -> idle` cycle.
//! Sign-in is the only writer of the session store: on success it generates
//! a fresh session token and stores the (identity id, token) pair in a
//! single write. Failed attempts never touch the store.

use parley_types::error::AuthError;
use parley_types::identity::{Identity, SignInForm, SignUpForm};
use parley_types::session::Session;
use tracing::{info, warn};

use crate::api::BackendApi;
use crate::store::SessionStore;

/// Controller for account creation and login.
///
/// Generic over [`BackendApi`] and [`SessionStore`] so the flows can be
/// exercised against in-memory fakes. Only surfaced error text survives an
/// outcome; the controller always returns to idle.
pub struct AuthController<A: BackendApi, S: SessionStore> {
    api: A,
    store: S,
    submitting: bool,
    last_error: Option<String>,
}

impl<A: BackendApi, S: SessionStore> AuthController<A, S> {
    pub fn new(api: A, store: S) -> Self {
        Self {
            api,
            store,
            submitting: false,
            last_error: None,
        }
    }

    /// Whether a submission is currently in flight. Callers disable the
    /// submit action while this is true.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Error text from the most recent failed outcome, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Access the session store shared with the other controllers.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create a new identity.
    ///
    /// On success the caller reports "account created" and leaves sign-in
    /// as a separate step. On failure the server-reported reason is
    /// surfaced verbatim; there is no retry.
    pub async fn sign_up(&mut self, form: &SignUpForm) -> Result<(), AuthError> {
        if self.submitting {
            return Err(AuthError::SubmissionInFlight);
        }
        self.submitting = true;
        self.last_error = None;

        let result = self.api.create_identity(form).await;
        self.submitting = false;

        match result {
            Ok(()) => {
                info!(email = %form.email, "account created");
                Ok(())
            }
            Err(err) => {
                warn!(email = %form.email, error = %err, "sign-up failed");
                self.last_error = Some(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Sign in, uploading the knowledge base, and establish the session.
    ///
    /// A missing knowledge file fails locally before any network call.
    /// Success performs exactly one store write with a freshly generated
    /// token; any failure leaves the store exactly as it was.
    ///
    /// Not idempotent: every submission re-uploads the file and may trigger
    /// a knowledge-base reindex server-side. The in-flight guard is the
    /// only dedup.
    pub async fn sign_in(&mut self, form: &SignInForm) -> Result<Identity, AuthError> {
        if self.submitting {
            return Err(AuthError::SubmissionInFlight);
        }
        if form.file.is_none() {
            let err = AuthError::MissingKnowledgeFile;
            self.last_error = Some(err.to_string());
            return Err(err);
        }

        self.submitting = true;
        self.last_error = None;

        let result = self.api.sign_in(form).await;
        self.submitting = false;

        let identity = match result {
            Ok(identity) => identity,
            Err(err) => {
                warn!(email = %form.email, error = %err, "sign-in failed");
                self.last_error = Some(err.to_string());
                return Err(err.into());
            }
        };

        let session = Session::new(identity.id.clone());
        self.store.set(&session).await?;
        info!(identity_id = %identity.id, "signed in, session established");

        Ok(identity)
    }

    /// Explicit logout: tear down the stored session.
    pub async fn logout(&self) -> Result<(), AuthError> {
        self.store.clear().await?;
        info!("session cleared");
        Ok(())
    }
}
