//! Session store: the current auth token and its lifecycle.
//!
//! The token is read from storage on every access rather than cached, so the
//! store always agrees with what is persisted. Writers are the login flow
//! ([`SessionStore::set_token`]), logout ([`SessionStore::clear`]) and the
//! HTTP client's 401 handler ([`SessionStore::expire`]). Every change is
//! published on a `watch` channel for front ends that need to react to a
//! forced logout.

mod storage;

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use secrecy::SecretString;
use tokio::sync::watch;
use tracing::{debug, warn};

pub use storage::{FileStorage, MemoryStorage, StorageError, TokenStorage};

/// Storage key the session token is persisted under.
pub const TOKEN_KEY: &str = "GB_TOKEN";

/// Session lifecycle state, as published to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// No token.
    Anonymous,
    /// A token is stored. It may still be rejected by the server.
    Authenticated,
    /// The server rejected the token with 401 and it was cleared.
    Expired,
}

/// Shared handle to the session token.
///
/// Cloning is cheap; all clones see the same storage and channel.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    storage: Arc<dyn TokenStorage>,
    state: watch::Sender<SessionState>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("storage", &self.inner.storage)
            .field("state", &*self.inner.state.borrow())
            .finish()
    }
}

impl SessionStore {
    /// Create a store over `storage`, starting from whatever token it holds.
    #[must_use]
    pub fn new(storage: Arc<dyn TokenStorage>) -> Self {
        let initial = match read_token(storage.as_ref()) {
            Ok(Some(_)) => SessionState::Authenticated,
            Ok(None) => SessionState::Anonymous,
            Err(e) => {
                warn!(error = %e, "Failed to read stored session, starting anonymous");
                SessionState::Anonymous
            }
        };
        let (state, _) = watch::channel(initial);

        Self {
            inner: Arc::new(SessionInner { storage, state }),
        }
    }

    /// Create a store persisted in a JSON file at `path`.
    #[must_use]
    pub fn persistent(path: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(FileStorage::new(path)))
    }

    /// Create a store with process-local storage.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// Read the current token. An empty stored value counts as no token.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the storage backend cannot be read.
    pub fn token(&self) -> Result<Option<SecretString>, StorageError> {
        Ok(read_token(self.inner.storage.as_ref())?.map(SecretString::from))
    }

    /// Whether a token is present. Unreadable storage counts as no session.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        match self.token() {
            Ok(token) => token.is_some(),
            Err(e) => {
                warn!(error = %e, "Failed to read session token");
                false
            }
        }
    }

    /// Store a token issued at login.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the storage backend cannot be written.
    pub fn set_token(&self, token: &str) -> Result<(), StorageError> {
        let token = token.trim();
        if token.is_empty() {
            return self.clear();
        }
        self.inner.storage.set(TOKEN_KEY, token)?;
        self.publish(SessionState::Authenticated);
        Ok(())
    }

    /// Remove the token (explicit logout).
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the storage backend cannot be written.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.inner.storage.remove(TOKEN_KEY)?;
        self.publish(SessionState::Anonymous);
        Ok(())
    }

    /// Remove the token because the server rejected it.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the storage backend cannot be written.
    pub fn expire(&self) -> Result<(), StorageError> {
        self.inner.storage.remove(TOKEN_KEY)?;
        self.publish(SessionState::Expired);
        Ok(())
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        *self.inner.state.borrow()
    }

    /// Subscribe to lifecycle changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.inner.state.subscribe()
    }

    fn publish(&self, state: SessionState) {
        let previous = self.inner.state.send_replace(state);
        if previous != state {
            debug!(?previous, current = ?state, "Session state changed");
        }
    }
}

fn read_token(storage: &dyn TokenStorage) -> Result<Option<String>, StorageError> {
    Ok(storage
        .get(TOKEN_KEY)?
        .filter(|token| !token.trim().is_empty()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn test_starts_anonymous_on_empty_storage() {
        let session = SessionStore::in_memory();
        assert_eq!(session.state(), SessionState::Anonymous);
        assert!(session.token().unwrap().is_none());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_picks_up_persisted_token() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(TOKEN_KEY, "persisted").unwrap();

        let session = SessionStore::new(storage);
        assert_eq!(session.state(), SessionState::Authenticated);
        assert_eq!(session.token().unwrap().unwrap().expose_secret(), "persisted");
    }

    #[test]
    fn test_set_and_clear() {
        let session = SessionStore::in_memory();
        session.set_token("t-1").unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.state(), SessionState::Authenticated);

        session.clear().unwrap();
        assert!(!session.is_authenticated());
        assert_eq!(session.state(), SessionState::Anonymous);
    }

    #[test]
    fn test_empty_token_is_no_token() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(TOKEN_KEY, "  ").unwrap();
        let session = SessionStore::new(storage);
        assert!(!session.is_authenticated());

        session.set_token("").unwrap();
        assert_eq!(session.state(), SessionState::Anonymous);
    }

    #[test]
    fn test_clones_share_state() {
        let session = SessionStore::in_memory();
        let other = session.clone();
        session.set_token("shared").unwrap();
        assert!(other.is_authenticated());
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let session = SessionStore::in_memory();
        session.set_token("very-secret").unwrap();
        assert!(!format!("{session:?}").contains("very-secret"));
    }

    #[test]
    fn test_persistent_store_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        SessionStore::persistent(&path).set_token("kept").unwrap();

        let restarted = SessionStore::persistent(&path);
        assert_eq!(restarted.state(), SessionState::Authenticated);
        assert_eq!(restarted.token().unwrap().unwrap().expose_secret(), "kept");
    }

    #[tokio::test]
    async fn test_subscribers_see_expiry() {
        let session = SessionStore::in_memory();
        session.set_token("t").unwrap();
        let mut rx = session.subscribe();

        session.expire().unwrap();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), SessionState::Expired);
        assert!(!session.is_authenticated());
    }
}
