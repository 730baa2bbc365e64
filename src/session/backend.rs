//! Durable storage behind the session store.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use parking_lot::Mutex;
use thiserror::Error;

use super::store::Session;

/// Errors from reading or writing the persisted session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to access session file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse session file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize session: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Session write did not complete: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Key-value namespace the session is persisted into.
pub trait SessionBackend: Send + Sync {
    /// Read the stored session. A missing store yields an empty session.
    fn load(&self) -> Result<Session, SessionError>;

    /// Replace the stored session.
    fn save(&self, session: &Session) -> Result<(), SessionError>;

    /// Remove every stored value.
    fn clear(&self) -> Result<(), SessionError>;
}

/// TOML file on disk, replaced atomically under an exclusive lock.
pub struct FileSessionBackend {
    path: PathBuf,
}

impl FileSessionBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> SessionError {
        SessionError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// Run `f` while holding the sibling `.lock` file exclusively.
    fn with_lock<T>(
        &self,
        f: impl FnOnce() -> Result<T, SessionError>,
    ) -> Result<T, SessionError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let lock_path = self.path.with_extension("lock");
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(|e| self.io_error(e))?;
        FileExt::lock_exclusive(&lock_file).map_err(|e| self.io_error(e))?;

        // Released when `lock_file` is dropped.
        f()
    }
}

impl SessionBackend for FileSessionBackend {
    fn load(&self) -> Result<Session, SessionError> {
        if !self.path.exists() {
            return Ok(Session::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        toml::from_str(&content).map_err(|e| SessionError::Parse {
            path: self.path.clone(),
            source: e,
        })
    }

    fn save(&self, session: &Session) -> Result<(), SessionError> {
        let content = toml::to_string(session)?;
        self.with_lock(|| {
            let tmp_path = self.path.with_extension("toml.tmp");
            write_private(&tmp_path, content.as_bytes()).map_err(|e| self.io_error(e))?;
            fs::rename(&tmp_path, &self.path).map_err(|e| self.io_error(e))
        })
    }

    fn clear(&self) -> Result<(), SessionError> {
        self.with_lock(|| match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        })
    }
}

/// Write `content` to `path` with owner-only permissions.
fn write_private(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.create(true).truncate(true).write(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;

    // `mode` only applies on creation; a leftover file keeps its old bits.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
    }

    file.write_all(content)?;
    file.sync_all()
}

/// Process-local store, used by tests and throwaway sessions.
#[derive(Default)]
pub struct MemorySessionBackend {
    stored: Mutex<Session>,
}

impl MemorySessionBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            stored: Mutex::new(session),
        }
    }
}

impl SessionBackend for MemorySessionBackend {
    fn load(&self) -> Result<Session, SessionError> {
        Ok(self.stored.lock().clone())
    }

    fn save(&self, session: &Session) -> Result<(), SessionError> {
        *self.stored.lock() = session.clone();
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        *self.stored.lock() = Session::default();
        Ok(())
    }
}
