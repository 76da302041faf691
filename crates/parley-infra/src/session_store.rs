//! File-backed session store.
//!
//! Persists the (identity id, session token) pair as `session.toml` in the
//! data directory so the session survives process restarts. Partial or
//! malformed contents read as absent -- the recovery path is a fresh
//! sign-in, never a degraded session.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use parley_core::store::SessionStore;
use parley_types::error::StoreError;
use parley_types::session::Session;

const SESSION_FILE: &str = "session.toml";

/// Session store writing to `{data_dir}/session.toml`.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(SESSION_FILE),
        }
    }
}

impl SessionStore for FileSessionStore {
    async fn set(&self, session: &Session) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::Io(e.to_string()))?;
        }
        let text = toml::to_string(session).map_err(|e| StoreError::Encode(e.to_string()))?;
        tokio::fs::write(&self.path, text)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))?;
        debug!(path = %self.path.display(), "session written");
        Ok(())
    }

    async fn get(&self) -> Result<Option<Session>, StoreError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(StoreError::Io(err.to_string())),
        };

        match toml::from_str::<Session>(&content) {
            Ok(session) if session.is_complete() => Ok(Some(session)),
            Ok(_) => {
                warn!("stored session is partial, treating as absent");
                Ok(None)
            }
            Err(err) => {
                warn!(error = %err, "stored session is unreadable, treating as absent");
                Ok(None)
            }
        }
    }

    async fn clear(&self) -> Result<(), StoreError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StoreError::Io(err.to_string())),
        }
    }
}
