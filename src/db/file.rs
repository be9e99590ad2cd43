use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::constants::{DATA_FILE_NAME, USERS_FILE_NAME};
use crate::error::Result;
use crate::models::{Reading, User};

use super::{DataDocument, RecordStore, UsersDocument};

/// Record store persisting each collection as a pretty-printed JSON
/// document under a single data directory
pub struct FileRecordStore {
    dir: PathBuf,
}

impl FileRecordStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn users_path(&self) -> PathBuf {
        self.dir.join(USERS_FILE_NAME)
    }

    fn data_path(&self) -> PathBuf {
        self.dir.join(DATA_FILE_NAME)
    }

    fn seed_missing<T: Serialize>(path: &Path, empty: &T) -> Result<()> {
        if !path.exists() {
            fs::write(path, serde_json::to_string_pretty(empty)?)?;
        }
        Ok(())
    }
}

impl RecordStore for FileRecordStore {
    fn initialize(&self) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        Self::seed_missing(&self.users_path(), &UsersDocument::default())?;
        Self::seed_missing(&self.data_path(), &DataDocument::default())?;

        Ok(())
    }

    fn read_users(&self) -> Result<Vec<User>> {
        let contents = fs::read_to_string(self.users_path())?;
        let doc: UsersDocument = serde_json::from_str(&contents)?;
        Ok(doc.users)
    }

    fn write_users(&self, users: Vec<User>) -> Result<()> {
        let doc = UsersDocument { users };
        fs::write(self.users_path(), serde_json::to_string_pretty(&doc)?)?;
        Ok(())
    }

    fn read_readings(&self) -> Result<Vec<Reading>> {
        let contents = fs::read_to_string(self.data_path())?;
        let doc: DataDocument = serde_json::from_str(&contents)?;
        Ok(doc.data)
    }

    fn write_readings(&self, readings: Vec<Reading>) -> Result<()> {
        let doc = DataDocument { data: readings };
        fs::write(self.data_path(), serde_json::to_string_pretty(&doc)?)?;
        Ok(())
    }
}
