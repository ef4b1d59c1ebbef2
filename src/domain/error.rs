//! Domain error types

use thiserror::Error;

/// Error when a closure payload or stored record cannot be read as settings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("Payload is not valid JSON: {0}")]
    NotJson(String),

    #[error("Payload is JSON but not an object (found {0})")]
    NotAnObject(&'static str),
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Cannot read bridge config: {0}")]
    ReadError(String),

    #[error("Bridge config is not valid TOML: {0}")]
    ParseError(String),

    #[error("Cannot write bridge config: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Bridge config already exists at: {0}")]
    AlreadyExists(String),
}
