//! Application state wiring the client together.
//!
//! AppState pins the controllers' generics to the concrete infra
//! implementations: the reqwest HTTP backend and the file session store.

use std::path::PathBuf;

use parley_infra::config::load_client_config;
use parley_infra::http::HttpBackend;
use parley_infra::session_store::FileSessionStore;
use parley_types::config::ClientConfig;

/// Shared application state for CLI commands.
pub struct AppState {
    pub config: ClientConfig,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Initialize the application state: resolve the data dir and load config.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = parley_infra::data_dir();
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_client_config(&data_dir).await;
        Ok(Self { config, data_dir })
    }

    /// A fresh backend client against the configured base URL.
    pub fn backend(&self) -> HttpBackend {
        HttpBackend::new(&self.config)
    }

    /// The session store shared by every command.
    pub fn store(&self) -> FileSessionStore {
        FileSessionStore::new(&self.data_dir)
    }

    /// Delay before a protected view redirects to the entry point.
    pub fn redirect_delay(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.config.redirect_delay_secs)
    }
}
