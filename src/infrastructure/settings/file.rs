//! File-backed settings store
//!
//! Persists a small JSON key/value document, one string value per key, the
//! way the host's local storage keeps items. Only the `settings` slot is
//! touched; other keys already in the document are preserved.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, warn};

use crate::application::ports::{SettingsStore, StorageError, SETTINGS_KEY};
use crate::domain::settings::SettingsRecord;

type Document = BTreeMap<String, String>;

/// Settings store backed by a JSON document on disk
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    /// Create a store at the default data directory path
    pub fn new() -> Self {
        let data_dir = dirs::data_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".local/share")))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("retroclock-companion");

        Self {
            path: data_dir.join("storage.json"),
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the storage document path
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Read the whole document. Missing or unreadable documents are empty.
    async fn read_document(&self) -> Document {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Document::new(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "settings unreadable");
                return Document::new();
            }
        };

        match Self::parse_document(&content) {
            Ok(doc) => doc,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "settings document corrupt");
                Document::new()
            }
        }
    }

    fn parse_document(content: &str) -> Result<Document, serde_json::Error> {
        serde_json::from_str(content)
    }

    fn encode_document(doc: &Document) -> Result<String, StorageError> {
        serde_json::to_string_pretty(doc).map_err(|e| StorageError::EncodeFailed(e.to_string()))
    }
}

impl Default for FileSettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SettingsStore for FileSettingsStore {
    async fn load(&self) -> Option<SettingsRecord> {
        let mut doc = self.read_document().await;
        let record = doc.remove(SETTINGS_KEY).map(SettingsRecord::from_raw);
        if record.is_none() {
            debug!(path = %self.path.display(), "no stored settings");
        }
        record
    }

    async fn save(&self, record: &SettingsRecord) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        }

        let mut doc = self.read_document().await;
        doc.insert(SETTINGS_KEY.to_string(), record.as_str().to_string());
        let content = Self::encode_document(&doc)?;

        // Write to temp file, then rename over the document
        let temp_path = self.temp_path();
        fs::write(&temp_path, content)
            .await
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;

        Ok(())
    }
}
