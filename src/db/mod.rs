pub mod file;
pub mod local;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::{Config, StorageKind};
use crate::error::Result;
use crate::models::{Reading, User};

/// Storage interface for the two record collections.
///
/// Implementations are synchronous; the facade runs them on the blocking
/// thread pool. Writes always replace the whole collection.
pub trait RecordStore: Send + Sync {
    /// Ensure the storage location exists, seeding each missing collection
    /// with an empty document. Idempotent: existing collections are left
    /// untouched.
    fn initialize(&self) -> Result<()>;

    fn read_users(&self) -> Result<Vec<User>>;

    fn write_users(&self, users: Vec<User>) -> Result<()>;

    fn read_readings(&self) -> Result<Vec<Reading>>;

    fn write_readings(&self, readings: Vec<Reading>) -> Result<()>;
}

/// Record store handle type (Arc-wrapped for sharing across tasks)
pub type Db = Arc<dyn RecordStore>;

/// Persisted shape of the users collection document
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UsersDocument {
    #[serde(default)]
    pub users: Vec<User>,
}

/// Persisted shape of the readings collection document
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DataDocument {
    #[serde(default)]
    pub data: Vec<Reading>,
}

/// Open the record store backend selected by the configuration
pub fn open_record_store(config: &Config) -> Db {
    match config.storage {
        StorageKind::File => {
            tracing::info!("Opening file record store at: {:?}", config.data_dir);
            Arc::new(file::FileRecordStore::new(config.data_dir.clone()))
        }
        StorageKind::Local => {
            tracing::info!("Opening in-memory record store");
            Arc::new(local::LocalRecordStore::new())
        }
    }
}
