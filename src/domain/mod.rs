//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod session;
pub mod settings;

// Re-export common types
pub use config::BridgeConfig;
pub use error::*;
pub use session::{ConfigSession, SessionState};
pub use settings::{ClosureResponse, ConfigurationPayload, DateFormat, SettingsRecord};
