//! Session token persistence.
//!
//! One opaque bearer token per profile, last login wins. No expiry tracking
//! happens client-side: a stale token looks exactly like a valid one until
//! the server rejects a request carrying it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::debug;

/// Storage seam for the session token. Injected into [`crate::ApiClient`] so
/// callers control persistence and tests can substitute a double.
pub trait TokenStore: Send + Sync {
    fn save(&self, token: &str) -> io::Result<()>;
    fn load(&self) -> io::Result<Option<String>>;
    fn clear(&self) -> io::Result<()>;
}

/// Token persisted as a single file on disk, surviving process restarts
/// within the same profile directory.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl TokenStore for FileTokenStore {
    fn save(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        debug!(path = %self.path.display(), "saving session token");
        fs::write(&self.path, token)
    }

    fn load(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim().to_string();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token))
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn clear(&self) -> io::Result<()> {
        debug!(path = %self.path.display(), "clearing session token");
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// In-process store for tests and short-lived embedders.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    // A poisoned lock still holds a valid token slot, so recover the guard
    // rather than propagate the panic.
    fn save(&self, token: &str) -> io::Result<()> {
        let mut guard = self.token.lock().unwrap_or_else(|e| e.into_inner());
        *guard = Some(token.to_string());
        Ok(())
    }

    fn load(&self) -> io::Result<Option<String>> {
        let guard = self.token.lock().unwrap_or_else(|e| e.into_inner());
        Ok(guard.clone())
    }

    fn clear(&self) -> io::Result<()> {
        let mut guard = self.token.lock().unwrap_or_else(|e| e.into_inner());
        *guard = None;
        Ok(())
    }
}
