//! Cancellable redirect timer.
//!
//! Protected views that activate without a session schedule a redirect to
//! the entry point after a fixed delay. The timer is owned by the view's
//! lifecycle: dropping or cancelling it before it fires suppresses the
//! redirect, so no callback can outlive the view.

use std::time::Duration;

use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// A one-shot, cancellable delay that signals when it fires.
///
/// The timer schedules future work without blocking: the owning view keeps
/// interacting while the delay runs, and observes the signal through
/// [`RedirectTimer::wait`]. Fires at most once.
pub struct RedirectTimer {
    cancel: CancellationToken,
    fired: Option<oneshot::Receiver<()>>,
}

impl RedirectTimer {
    /// Start a timer that fires after `delay` unless cancelled first.
    pub fn start(delay: Duration) -> Self {
        let cancel = CancellationToken::new();
        let (tx, rx) = oneshot::channel();

        let token = cancel.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    debug!("redirect timer cancelled");
                }
                _ = tokio::time::sleep(delay) => {
                    // Receiver may already be gone; nothing to do then.
                    let _ = tx.send(());
                }
            }
        });

        Self {
            cancel,
            fired: Some(rx),
        }
    }

    /// Suppress the redirect. Safe to call after the timer has fired.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Wait for the timer outcome: `true` if it fired, `false` if it was
    /// cancelled first. The signal is consumed; later calls return `false`.
    pub async fn wait(&mut self) -> bool {
        match self.fired.take() {
            Some(rx) => rx.await.is_ok(),
            None => false,
        }
    }
}

impl Drop for RedirectTimer {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
