use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use super::backend::{FileSessionBackend, MemorySessionBackend, SessionBackend, SessionError};
use super::secret::SecureString;
use crate::models::UserType;

/// Authentication token and identity of the signed-in user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub auth_token: Option<SecureString>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub user_type: Option<UserType>,
}

impl Session {
    /// True when a non-empty token is present.
    pub fn is_authenticated(&self) -> bool {
        self.auth_token.as_ref().is_some_and(|t| !t.is_empty())
    }
}

/// Observable session shared by the API client and every container.
///
/// Reads are served from memory. Writes go to the backend first and are
/// then published to all subscribers, so a subscriber never observes a
/// session that failed to persist.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<SessionStoreInner>,
}

struct SessionStoreInner {
    backend: Box<dyn SessionBackend>,
    current: watch::Sender<Session>,
    /// Serializes persist+publish so concurrent writers cannot interleave.
    write_lock: Mutex<()>,
}

impl SessionStore {
    /// Open a store over `backend`, loading whatever it already holds.
    pub fn open(backend: impl SessionBackend + 'static) -> Result<Self, SessionError> {
        let session = backend.load()?;
        tracing::debug!(
            authenticated = session.is_authenticated(),
            "Session loaded"
        );
        Ok(Self {
            inner: Arc::new(SessionStoreInner {
                backend: Box::new(backend),
                current: watch::Sender::new(session),
                write_lock: Mutex::new(()),
            }),
        })
    }

    /// Open the TOML-file store at `path`.
    pub fn open_file(path: impl Into<PathBuf>) -> Result<Self, SessionError> {
        Self::open(FileSessionBackend::new(path))
    }

    /// Empty store that lives only as long as the process.
    pub fn in_memory() -> Self {
        Self::with_session(Session::default())
    }

    /// In-memory store pre-populated with `session`.
    pub fn with_session(session: Session) -> Self {
        Self {
            inner: Arc::new(SessionStoreInner {
                backend: Box::new(MemorySessionBackend::with_session(session.clone())),
                current: watch::Sender::new(session),
                write_lock: Mutex::new(()),
            }),
        }
    }

    /// Snapshot of the current session.
    pub fn current(&self) -> Session {
        self.inner.current.borrow().clone()
    }

    /// The bearer token, if one is stored and non-empty.
    pub fn auth_token(&self) -> Option<SecureString> {
        self.inner
            .current
            .borrow()
            .auth_token
            .clone()
            .filter(|t| !t.is_empty())
    }

    pub fn user_id(&self) -> Option<String> {
        self.inner.current.borrow().user_id.clone()
    }

    pub fn user_type(&self) -> Option<UserType> {
        self.inner.current.borrow().user_type
    }

    pub fn is_logged_in(&self) -> bool {
        self.inner.current.borrow().is_authenticated()
    }

    /// Receiver that sees the current session immediately and every later write.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.inner.current.subscribe()
    }

    /// Persist `session` and publish it.
    ///
    /// The backend write runs on the blocking pool.
    pub async fn save(&self, session: Session) -> Result<(), SessionError> {
        let store = self.clone();
        tokio::task::spawn_blocking(move || store.save_blocking(session)).await?
    }

    /// Remove token, user id and user type, then publish the empty session.
    pub async fn clear(&self) -> Result<(), SessionError> {
        let store = self.clone();
        tokio::task::spawn_blocking(move || store.clear_blocking()).await?
    }

    fn save_blocking(&self, session: Session) -> Result<(), SessionError> {
        let _guard = self.inner.write_lock.lock();
        self.inner.backend.save(&session)?;
        tracing::info!(
            user_id = session.user_id.as_deref().unwrap_or("-"),
            "Session stored"
        );
        self.inner.current.send_replace(session);
        Ok(())
    }

    fn clear_blocking(&self) -> Result<(), SessionError> {
        let _guard = self.inner.write_lock.lock();
        self.inner.backend.clear()?;
        tracing::info!("Session cleared");
        self.inner.current.send_replace(Session::default());
        Ok(())
    }
}
