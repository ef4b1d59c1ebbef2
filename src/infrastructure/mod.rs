//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the filesystem, the desktop browser and stdout.

pub mod config;
pub mod messaging;
pub mod settings;
pub mod surface;

// Re-export adapters
pub use config::XdgConfigStore;
pub use messaging::StdoutMessenger;
pub use settings::{FileSettingsStore, InMemorySettingsStore};
pub use surface::{create_surface, BrowserSurface, NoOpSurface};
