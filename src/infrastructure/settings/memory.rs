//! In-memory settings store

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::application::ports::{SettingsStore, StorageError};
use crate::domain::settings::SettingsRecord;

/// Settings store that lives as long as the process
#[derive(Debug, Default)]
pub struct InMemorySettingsStore {
    raw: Mutex<Option<String>>,
}

impl InMemorySettingsStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with a raw record
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Mutex::new(Some(raw.into())),
        }
    }

    /// Raw stored text, if any
    pub fn raw(&self) -> Option<String> {
        self.raw
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn load(&self) -> Option<SettingsRecord> {
        self.raw().map(SettingsRecord::from_raw)
    }

    async fn save(&self, record: &SettingsRecord) -> Result<(), StorageError> {
        let mut raw = self.raw.lock().unwrap_or_else(PoisonError::into_inner);
        *raw = Some(record.as_str().to_string());
        Ok(())
    }
}
