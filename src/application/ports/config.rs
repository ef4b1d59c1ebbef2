//! Bridge config storage port

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::config::BridgeConfig;
use crate::domain::error::ConfigError;

/// Where the bridge's own settings (page URL, storage path, browser, log level) live
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Stored config; all fields unset when nothing has been written yet
    async fn load(&self) -> Result<BridgeConfig, ConfigError>;

    /// Overwrite the stored config
    async fn save(&self, config: &BridgeConfig) -> Result<(), ConfigError>;

    fn path(&self) -> PathBuf;

    fn exists(&self) -> bool;

    /// Write the shipped defaults. Refuses to overwrite an existing file.
    async fn init(&self) -> Result<(), ConfigError>;
}
