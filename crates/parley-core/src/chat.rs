//! Message controller: the live transcript for the active session.
//!
//! Sends are modeled as an explicit two-phase append: `begin_send` places
//! the user's turn in the transcript optimistically and raises the
//! in-flight flag; `complete_send` appends either the backend's reply or a
//! synthesized failure entry and releases the flag. The visible
//! conversation therefore never loses the user's turn, whatever the
//! network does.

use std::time::Duration;

use parley_types::chat::ChatMessage;
use parley_types::error::ApiError;
use parley_types::session::Session;
use tracing::{debug, warn};

use crate::api::BackendApi;
use crate::timer::RedirectTimer;

/// Error raised when the chat view activates without a session.
pub const AUTH_ERROR_CHAT: &str = "Authentication error: You must be logged in to chat.";

/// Prefix of the synthesized assistant entry appended on a failed exchange.
const SEND_FAILURE_PREFIX: &str = "Sorry, something went wrong. Please try again. Error: ";

/// Owns the live transcript and the at-most-one-outstanding-send
/// discipline for the current session.
///
/// The transcript is in-memory only: it is discarded with the controller
/// and is distinct from the backend-persisted conversations the history
/// aggregator reads.
pub struct MessageController<A: BackendApi> {
    api: A,
    session: Option<Session>,
    transcript: Vec<ChatMessage>,
    draft: String,
    in_flight: bool,
    error: Option<String>,
}

impl<A: BackendApi> MessageController<A> {
    /// Activate the chat view.
    ///
    /// With a session, the controller starts ready. Without one it raises
    /// the authentication-error state immediately and schedules a redirect
    /// to the entry point after `redirect_delay`; the returned timer is
    /// owned by the view and fires exactly once unless cancelled.
    pub fn activate(
        api: A,
        session: Option<Session>,
        redirect_delay: Duration,
    ) -> (Self, Option<RedirectTimer>) {
        let timer = if session.is_none() {
            warn!("chat view activated without a session, scheduling redirect");
            Some(RedirectTimer::start(redirect_delay))
        } else {
            None
        };

        let error = session.is_none().then(|| AUTH_ERROR_CHAT.to_string());
        let controller = Self {
            api,
            session,
            transcript: Vec::new(),
            draft: String::new(),
            in_flight: false,
            error,
        };
        (controller, timer)
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Whether a send is currently in flight. The view disables input
    /// while this is true.
    pub fn is_sending(&self) -> bool {
        self.in_flight
    }

    /// Whether the controller holds a valid session.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Banner-level error, shown when the transcript is otherwise empty.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Current pending-input buffer.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Replace the pending-input buffer.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Phase one: validate, optimistically append the user's turn, and
    /// mark the exchange in flight.
    ///
    /// Returns the message text to submit, or `None` when a precondition
    /// fails -- empty text after trimming, no session, or a send already
    /// in flight. Precondition violations are deliberate silent no-ops:
    /// the transcript is unchanged and no request may be issued.
    pub fn begin_send(&mut self, text: &str) -> Option<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() || self.session.is_none() || self.in_flight {
            debug!(
                in_flight = self.in_flight,
                authenticated = self.session.is_some(),
                "send ignored by precondition guard"
            );
            return None;
        }

        self.in_flight = true;
        self.error = None;
        self.transcript.push(ChatMessage::user(trimmed));
        Some(trimmed.to_string())
    }

    /// Phase two: append the outcome and release the in-flight flag.
    ///
    /// A reply becomes an assistant entry; a failure becomes a synthesized
    /// assistant entry carrying the underlying error text, and is also
    /// recorded for banner display. Either way the draft is cleared and
    /// further sends re-enabled.
    pub fn complete_send(&mut self, result: Result<String, ApiError>) {
        match result {
            Ok(reply) => {
                self.transcript.push(ChatMessage::assistant(reply));
            }
            Err(err) => {
                let explanation = format!("{SEND_FAILURE_PREFIX}{err}");
                warn!(error = %err, "message send failed");
                self.error = Some(explanation.clone());
                self.transcript.push(ChatMessage::assistant(explanation));
            }
        }
        self.draft.clear();
        self.in_flight = false;
    }

    /// Send one message through the backend.
    ///
    /// The backend call is the sole suspension point; sends are strictly
    /// serialized by the in-flight guard. Returns `false` when the send
    /// was a precondition no-op.
    pub async fn send_message(&mut self, text: &str) -> bool {
        let Some(session) = self.session.clone() else {
            debug!("send ignored: no session");
            return false;
        };
        let Some(message) = self.begin_send(text) else {
            return false;
        };
        let result = self.api.send_message(&session, &message).await;
        self.complete_send(result);
        true
    }
}
