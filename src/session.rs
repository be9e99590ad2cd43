//! Session persistence: a single slot holding the signed-in user's id.
//!
//! At most one session exists per store; a new sign-in overwrites the
//! previous value.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::config::{Config, StorageKind};
use crate::constants::SESSION_FILE_NAME;
use crate::error::Result;

/// Single-slot store for the current user id
pub trait SessionStore: Send + Sync {
    fn save(&self, user_id: &str) -> Result<()>;

    fn load(&self) -> Result<Option<String>>;

    /// Clearing an already-empty slot succeeds
    fn clear(&self) -> Result<()>;
}

/// Session store handle type
pub type Sessions = Arc<dyn SessionStore>;

/// Session slot persisted as a plain file holding the raw user id
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(SESSION_FILE_NAME),
        }
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, user_id: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, user_id)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(id) if id.is_empty() => Ok(None),
            Ok(id) => Ok(Some(id)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory session slot for the fallback backend
#[derive(Default)]
pub struct LocalSessionStore {
    slot: Mutex<Option<String>>,
}

impl LocalSessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_slot<R>(&self, f: impl FnOnce(&mut Option<String>) -> R) -> R {
        let mut guard = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

impl SessionStore for LocalSessionStore {
    fn save(&self, user_id: &str) -> Result<()> {
        self.with_slot(|slot| *slot = Some(user_id.to_string()));
        Ok(())
    }

    fn load(&self) -> Result<Option<String>> {
        Ok(self.with_slot(|slot| slot.clone()))
    }

    fn clear(&self) -> Result<()> {
        self.with_slot(|slot| *slot = None);
        Ok(())
    }
}

/// Open the session store backend selected by the configuration
pub fn open_session_store(config: &Config) -> Sessions {
    match config.storage {
        StorageKind::File => Arc::new(FileSessionStore::new(&config.data_dir)),
        StorageKind::Local => Arc::new(LocalSessionStore::new()),
    }
}
