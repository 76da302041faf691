//! In-memory fakes for controller tests.
//!
//! `MockBackend` scripts per-endpoint responses and counts calls so tests
//! can assert that guarded operations never reach the network. `MemoryStore`
//! is a plain mutex-held `SessionStore`.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use parley_types::chat::Conversation;
use parley_types::error::{ApiError, StoreError};
use parley_types::identity::{Identity, SignInForm, SignUpForm};
use parley_types::session::Session;

use crate::api::BackendApi;
use crate::store::SessionStore;

/// Scripted backend fake. Responses are queued per endpoint and popped in
/// FIFO order; an empty queue fails the test loudly.
#[derive(Default)]
pub struct MockBackend {
    pub create_identity_calls: AtomicUsize,
    pub sign_in_calls: AtomicUsize,
    pub send_calls: AtomicUsize,
    pub conversations_calls: AtomicUsize,
    create_identity_responses: Mutex<Vec<Result<(), ApiError>>>,
    sign_in_responses: Mutex<Vec<Result<Identity, ApiError>>>,
    send_responses: Mutex<Vec<Result<String, ApiError>>>,
    conversations_responses: Mutex<Vec<Result<Vec<Conversation>, ApiError>>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_create_identity(&self, response: Result<(), ApiError>) {
        self.create_identity_responses.lock().unwrap().push(response);
    }

    pub fn push_sign_in(&self, response: Result<Identity, ApiError>) {
        self.sign_in_responses.lock().unwrap().push(response);
    }

    pub fn push_send(&self, response: Result<String, ApiError>) {
        self.send_responses.lock().unwrap().push(response);
    }

    pub fn push_conversations(&self, response: Result<Vec<Conversation>, ApiError>) {
        self.conversations_responses.lock().unwrap().push(response);
    }
}

fn pop<T>(queue: &Mutex<Vec<Result<T, ApiError>>>, endpoint: &str) -> Result<T, ApiError> {
    let mut queue = queue.lock().unwrap();
    assert!(
        !queue.is_empty(),
        "unexpected call to {endpoint}: no scripted response"
    );
    queue.remove(0)
}

impl BackendApi for MockBackend {
    async fn create_identity(&self, _form: &SignUpForm) -> Result<(), ApiError> {
        self.create_identity_calls.fetch_add(1, Ordering::SeqCst);
        pop(&self.create_identity_responses, "create_identity")
    }

    async fn sign_in(&self, _form: &SignInForm) -> Result<Identity, ApiError> {
        self.sign_in_calls.fetch_add(1, Ordering::SeqCst);
        pop(&self.sign_in_responses, "sign_in")
    }

    async fn send_message(&self, _session: &Session, _message: &str) -> Result<String, ApiError> {
        self.send_calls.fetch_add(1, Ordering::SeqCst);
        pop(&self.send_responses, "send_message")
    }

    async fn conversations(&self, _identity_id: &str) -> Result<Vec<Conversation>, ApiError> {
        self.conversations_calls.fetch_add(1, Ordering::SeqCst);
        pop(&self.conversations_responses, "conversations")
    }
}

/// Mutex-held in-memory session store.
#[derive(Default)]
pub struct MemoryStore {
    session: Mutex<Option<Session>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    async fn set(&self, session: &Session) -> Result<(), StoreError> {
        *self.session.lock().unwrap() = Some(session.clone());
        Ok(())
    }

    async fn get(&self) -> Result<Option<Session>, StoreError> {
        let held = self.session.lock().unwrap();
        Ok(held.clone().filter(Session::is_complete))
    }

    async fn clear(&self) -> Result<(), StoreError> {
        *self.session.lock().unwrap() = None;
        Ok(())
    }
}

/// A minimal identity for scripting successful sign-ins.
pub fn test_identity(id: &str) -> Identity {
    Identity {
        id: id.to_string(),
        email: "ada@example.com".to_string(),
        name: Some("Ada".to_string()),
        company: None,
    }
}
