use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::constants::{LOCAL_DATA_KEY, LOCAL_USERS_KEY};
use crate::error::Result;
use crate::models::{Reading, User};

use super::{DataDocument, RecordStore, UsersDocument};

/// In-memory key-value fallback backend.
///
/// Holds the same JSON document shapes as the file backend, compactly
/// encoded under plain string keys. Contents live only as long as the
/// process.
#[derive(Default)]
pub struct LocalRecordStore {
    slots: Mutex<HashMap<String, String>>,
}

impl LocalRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_slots<R>(&self, f: impl FnOnce(&mut HashMap<String, String>) -> R) -> R {
        let mut guard = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

impl RecordStore for LocalRecordStore {
    fn initialize(&self) -> Result<()> {
        let users_doc = serde_json::to_string(&UsersDocument::default())?;
        let data_doc = serde_json::to_string(&DataDocument::default())?;

        self.with_slots(|slots| {
            slots
                .entry(LOCAL_USERS_KEY.to_string())
                .or_insert(users_doc);
            slots.entry(LOCAL_DATA_KEY.to_string()).or_insert(data_doc);
        });

        Ok(())
    }

    fn read_users(&self) -> Result<Vec<User>> {
        // An absent slot reads as an empty collection
        match self.with_slots(|slots| slots.get(LOCAL_USERS_KEY).cloned()) {
            Some(raw) => Ok(serde_json::from_str::<UsersDocument>(&raw)?.users),
            None => Ok(Vec::new()),
        }
    }

    fn write_users(&self, users: Vec<User>) -> Result<()> {
        let raw = serde_json::to_string(&UsersDocument { users })?;
        self.with_slots(|slots| slots.insert(LOCAL_USERS_KEY.to_string(), raw));
        Ok(())
    }

    fn read_readings(&self) -> Result<Vec<Reading>> {
        match self.with_slots(|slots| slots.get(LOCAL_DATA_KEY).cloned()) {
            Some(raw) => Ok(serde_json::from_str::<DataDocument>(&raw)?.data),
            None => Ok(Vec::new()),
        }
    }

    fn write_readings(&self, readings: Vec<Reading>) -> Result<()> {
        let raw = serde_json::to_string(&DataDocument { data: readings })?;
        self.with_slots(|slots| slots.insert(LOCAL_DATA_KEY.to_string(), raw));
        Ok(())
    }
}
