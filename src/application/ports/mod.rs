//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod messenger;
pub mod settings_store;
pub mod surface;

// Re-export common types
pub use config::ConfigStore;
pub use messenger::{AppMessenger, MessageError};
pub use settings_store::{SettingsStore, StorageError, SETTINGS_KEY};
pub use surface::{ExternalSurface, SurfaceError};
