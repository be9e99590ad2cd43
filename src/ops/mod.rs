//! The public operation surface consumed by UI/boundary code.

pub mod readings;
pub mod session;
pub mod users;
pub mod validation;

use tokio::task;

use crate::config::Config;
use crate::db::{open_record_store, Db};
use crate::error::Result;
use crate::models::{Reading, User};
use crate::session::{open_session_store, Sessions};

/// Facade over the record store and session store.
///
/// Cheap to clone; all clones share the same backends.
#[derive(Clone)]
pub struct Database {
    store: Db,
    sessions: Sessions,
    config: Config,
}

impl Database {
    /// Open a database with the backends selected by the configuration
    pub fn open(config: Config) -> Self {
        let store = open_record_store(&config);
        let sessions = open_session_store(&config);
        Self {
            store,
            sessions,
            config,
        }
    }

    /// Assemble a database from explicit backends
    pub fn with_backends(store: Db, sessions: Sessions, config: Config) -> Self {
        Self {
            store,
            sessions,
            config,
        }
    }

    /// Ensure the storage location and empty collections exist.
    ///
    /// Best-effort and idempotent: failures are logged, not raised. A broken
    /// storage location surfaces later, through the read/write helpers.
    pub async fn initialize(&self) {
        let store = self.store.clone();
        match task::spawn_blocking(move || store.initialize()).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::error!("Error initializing database: {}", e),
            Err(e) => tracing::error!("Initialize task failed: {}", e),
        }
    }

    /// Read the users collection under the configured read policy.
    ///
    /// With strict reads off (the default), a failed read degrades to an
    /// empty collection and is logged; with strict reads on it propagates.
    pub(crate) async fn load_users(&self) -> Result<Vec<User>> {
        let store = self.store.clone();
        match task::spawn_blocking(move || store.read_users()).await? {
            Ok(users) => Ok(users),
            Err(e) if self.config.strict_reads => Err(e),
            Err(e) => {
                tracing::error!("Error reading users: {}", e);
                Ok(Vec::new())
            }
        }
    }

    /// Read the readings collection under the configured read policy
    pub(crate) async fn load_readings(&self) -> Result<Vec<Reading>> {
        let store = self.store.clone();
        match task::spawn_blocking(move || store.read_readings()).await? {
            Ok(readings) => Ok(readings),
            Err(e) if self.config.strict_reads => Err(e),
            Err(e) => {
                tracing::error!("Error reading data: {}", e);
                Ok(Vec::new())
            }
        }
    }

    /// Replace the persisted users collection. Write failures propagate.
    pub(crate) async fn store_users(&self, users: Vec<User>) -> Result<()> {
        let store = self.store.clone();
        task::spawn_blocking(move || store.write_users(users)).await?
    }

    /// Replace the persisted readings collection. Write failures propagate.
    pub(crate) async fn store_readings(&self, readings: Vec<Reading>) -> Result<()> {
        let store = self.store.clone();
        task::spawn_blocking(move || store.write_readings(readings)).await?
    }

    pub(crate) fn sessions(&self) -> Sessions {
        self.sessions.clone()
    }
}
