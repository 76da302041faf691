//! SessionStore trait definition.
//!
//! The session store is the only resource shared across controllers: the
//! auth controller is its single writer, the chat and history controllers
//! are readers. Implementations live in parley-infra (e.g.
//! `FileSessionStore`).

use parley_types::error::StoreError;
use parley_types::session::Session;

/// Persistent store for the client's (identity id, session token) pair.
///
/// Contract:
/// - `set` overwrites any prior session unconditionally.
/// - `get` returns `None` when either half is missing or empty -- partial
///   state is absent, never a degraded session.
/// - `clear` removes both values; clearing an empty store succeeds.
pub trait SessionStore: Send + Sync {
    fn set(
        &self,
        session: &Session,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;

    fn get(
        &self,
    ) -> impl std::future::Future<Output = Result<Option<Session>, StoreError>> + Send;

    fn clear(&self) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;
}
