//! Device messaging port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::settings::ConfigurationPayload;

/// Device messaging errors
#[derive(Debug, Clone, Error)]
pub enum MessageError {
    #[error("Device not connected")]
    NotConnected,

    #[error("Failed to send app message: {0}")]
    SendFailed(String),
}

/// Port for sending structured messages to the on-device application
#[async_trait]
pub trait AppMessenger: Send + Sync {
    /// Send a message to the watchface. Fire-and-forget: success only means
    /// the message was handed to the channel.
    ///
    /// # Arguments
    /// * `message` - Key/value mapping to deliver
    async fn send_app_message(&self, message: &ConfigurationPayload) -> Result<(), MessageError>;
}

/// Blanket implementation for boxed messenger types
#[async_trait]
impl AppMessenger for Box<dyn AppMessenger> {
    async fn send_app_message(&self, message: &ConfigurationPayload) -> Result<(), MessageError> {
        self.as_ref().send_app_message(message).await
    }
}
