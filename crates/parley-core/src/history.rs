//! History aggregator: read-only review of past conversations.
//!
//! Fetches the full conversation set for the authenticated identity in one
//! request, sorts it most-recent-first client-side (the backend's order is
//! not trusted), and exposes the logical render contract: preview line,
//! tag set with placeholder, and the four mutually exclusive view states.

use std::time::Duration;

use parley_types::chat::Conversation;
use tracing::{info, warn};

use crate::api::BackendApi;
use crate::timer::RedirectTimer;

/// Error raised when the history view activates without a session.
pub const AUTH_ERROR_HISTORY: &str = "You must be logged in to view chat history.";

/// Preview line for a conversation with no messages.
pub const EMPTY_PREVIEW: &str = "Empty Conversation";

/// Tag rendered when a conversation has no tags; never render zero tags.
pub const PLACEHOLDER_TAG: &str = "No tags yet";

/// The four render states of the history view. Mutually exclusive and
/// exhaustive: exactly one applies at any time.
#[derive(Debug)]
pub enum HistoryState {
    Loading,
    /// Terminal for this view instance; reload to re-attempt.
    Error(String),
    Empty,
    Loaded(Vec<Conversation>),
}

/// Read-only aggregator over the backend's conversation history.
pub struct HistoryController<A: BackendApi> {
    api: A,
    identity_id: Option<String>,
    state: HistoryState,
}

impl<A: BackendApi> HistoryController<A> {
    /// Activate the history view with the identity resolved from the
    /// session store.
    ///
    /// An absent identity raises the authentication-error state
    /// immediately and schedules its own redirect timer, independent of
    /// any timer the chat view may hold.
    pub fn activate(
        api: A,
        identity_id: Option<String>,
        redirect_delay: Duration,
    ) -> (Self, Option<RedirectTimer>) {
        let (state, timer) = match identity_id {
            Some(_) => (HistoryState::Loading, None),
            None => {
                warn!("history view activated without a session, scheduling redirect");
                (
                    HistoryState::Error(AUTH_ERROR_HISTORY.to_string()),
                    Some(RedirectTimer::start(redirect_delay)),
                )
            }
        };

        let controller = Self {
            api,
            identity_id,
            state,
        };
        (controller, timer)
    }

    pub fn state(&self) -> &HistoryState {
        &self.state
    }

    /// Fetch and order the conversation set. One fetch per activation.
    ///
    /// No-op when the view is already in the terminal auth-error state.
    /// Any failure is terminal: the state becomes `Error` and stays there
    /// until the view is reloaded.
    pub async fn load(&mut self) {
        let Some(identity_id) = self.identity_id.clone() else {
            return;
        };

        match self.api.conversations(&identity_id).await {
            Ok(mut conversations) => {
                // Most recent first, regardless of backend order.
                conversations.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                info!(count = conversations.len(), "conversation history loaded");
                self.state = if conversations.is_empty() {
                    HistoryState::Empty
                } else {
                    HistoryState::Loaded(conversations)
                };
            }
            Err(err) => {
                warn!(error = %err, "failed to load conversation history");
                self.state = HistoryState::Error(err.to_string());
            }
        }
    }
}

/// Logical render contract for a single conversation.
pub trait ConversationDisplay {
    /// One-line preview: the first message's content, or a placeholder for
    /// an empty conversation.
    fn preview(&self) -> &str;

    /// Tags to render. An empty tag set yields exactly one placeholder
    /// entry, never zero.
    fn display_tags(&self) -> Vec<&str>;
}

impl ConversationDisplay for Conversation {
    fn preview(&self) -> &str {
        self.messages
            .first()
            .map(|m| m.content.as_str())
            .unwrap_or(EMPTY_PREVIEW)
    }

    fn display_tags(&self) -> Vec<&str> {
        if self.tags.is_empty() {
            vec![PLACEHOLDER_TAG]
        } else {
            self.tags.iter().map(String::as_str).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use parley_types::chat::ChatMessage;
    use parley_types::error::ApiError;
    use std::sync::atomic::Ordering;

    use crate::test_support::MockBackend;

    fn convo(id: &str, hour: u32, messages: Vec<ChatMessage>, tags: Vec<String>) -> Conversation {
        Conversation {
            id: id.to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 5, 1, hour, 0, 0).unwrap(),
            messages,
            tags,
        }
    }

    #[tokio::test]
    async fn test_load_sorts_most_recent_first() {
        let api = MockBackend::new();
        // Backend returns T1, T3, T2 -- its order is not trusted.
        api.push_conversations(Ok(vec![
            convo("t1", 1, vec![], vec![]),
            convo("t3", 3, vec![], vec![]),
            convo("t2", 2, vec![], vec![]),
        ]));
        let (mut history, _) =
            HistoryController::activate(api, Some("u-1".to_string()), Duration::from_secs(3));

        history.load().await;

        match history.state() {
            HistoryState::Loaded(convos) => {
                let ids: Vec<&str> = convos.iter().map(|c| c.id.as_str()).collect();
                assert_eq!(ids, vec!["t3", "t2", "t1"]);
            }
            other => panic!("expected Loaded, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_zero_conversations_is_empty_state() {
        let api = MockBackend::new();
        api.push_conversations(Ok(vec![]));
        let (mut history, _) =
            HistoryController::activate(api, Some("u-1".to_string()), Duration::from_secs(3));

        history.load().await;
        assert!(matches!(history.state(), HistoryState::Empty));
    }

    #[tokio::test]
    async fn test_failure_is_terminal_error_state() {
        let api = MockBackend::new();
        api.push_conversations(Err(ApiError::Rejected {
            status: 404,
            detail: "User not found.".to_string(),
        }));
        let (mut history, _) =
            HistoryController::activate(api, Some("u-1".to_string()), Duration::from_secs(3));

        history.load().await;
        match history.state() {
            HistoryState::Error(reason) => assert_eq!(reason, "User not found."),
            other => panic!("expected Error, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_activation_without_identity_schedules_redirect() {
        let api = MockBackend::new();
        let (mut history, timer) = HistoryController::activate(api, None, Duration::from_secs(3));

        match history.state() {
            HistoryState::Error(reason) => assert_eq!(reason, AUTH_ERROR_HISTORY),
            other => panic!("expected Error, got {other:?}"),
        }

        // load() is a no-op: no fetch is issued.
        history.load().await;
        assert_eq!(history.api.conversations_calls.load(Ordering::SeqCst), 0);

        let mut timer = timer.expect("redirect scheduled");
        assert!(timer.wait().await);
        assert!(!timer.wait().await);
    }

    #[test]
    fn test_preview_uses_first_message() {
        let c = convo(
            "c",
            1,
            vec![
                ChatMessage::user("How do refunds work?"),
                ChatMessage::assistant("Gladly."),
            ],
            vec![],
        );
        assert_eq!(c.preview(), "How do refunds work?");
    }

    #[test]
    fn test_preview_placeholder_for_empty_conversation() {
        let c = convo("c", 1, vec![], vec![]);
        assert_eq!(c.preview(), EMPTY_PREVIEW);
    }

    #[test]
    fn test_empty_tags_render_single_placeholder() {
        let c = convo("c", 1, vec![], vec![]);
        assert_eq!(c.display_tags(), vec![PLACEHOLDER_TAG]);
    }

    #[test]
    fn test_tags_render_as_is() {
        let c = convo(
            "c",
            1,
            vec![],
            vec!["billing".to_string(), "follow-up".to_string()],
        );
        assert_eq!(c.display_tags(), vec!["billing", "follow-up"]);
    }
}
