//! Settings storage port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::settings::SettingsRecord;

/// Storage key holding the last accepted closure payload
pub const SETTINGS_KEY: &str = "settings";

/// Settings storage errors
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("Failed to write settings: {0}")]
    WriteFailed(String),

    #[error("Failed to encode settings document: {0}")]
    EncodeFailed(String),
}

/// Port for the single persisted settings record
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Load the persisted record.
    ///
    /// # Returns
    /// The record, or None when nothing was stored or the stored data
    /// could not be read. Never fails.
    async fn load(&self) -> Option<SettingsRecord>;

    /// Overwrite the persisted record.
    ///
    /// A later `load` sees either the old record or the new one, never a
    /// partial write.
    ///
    /// # Arguments
    /// * `record` - The record to persist
    async fn save(&self, record: &SettingsRecord) -> Result<(), StorageError>;
}

/// Blanket implementation for boxed store types
#[async_trait]
impl SettingsStore for Box<dyn SettingsStore> {
    async fn load(&self) -> Option<SettingsRecord> {
        self.as_ref().load().await
    }

    async fn save(&self, record: &SettingsRecord) -> Result<(), StorageError> {
        self.as_ref().save(record).await
    }
}
