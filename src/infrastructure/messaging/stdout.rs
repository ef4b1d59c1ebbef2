//! Stdout messenger adapter
//!
//! Writes each device message as one compact JSON line on stdout, for a
//! host process that relays lines to the watch.

use async_trait::async_trait;
use tokio::io::{self, AsyncWriteExt};

use crate::application::ports::{AppMessenger, MessageError};
use crate::domain::settings::ConfigurationPayload;

/// Messenger that emits JSON lines on stdout
pub struct StdoutMessenger;

impl StdoutMessenger {
    /// Create a new stdout messenger
    pub fn new() -> Self {
        Self
    }

    /// Encode a message as a single output line
    fn encode_line(message: &ConfigurationPayload) -> String {
        format!("{}\n", message.to_json())
    }
}

impl Default for StdoutMessenger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AppMessenger for StdoutMessenger {
    async fn send_app_message(&self, message: &ConfigurationPayload) -> Result<(), MessageError> {
        let line = Self::encode_line(message);
        let mut stdout = io::stdout();

        stdout
            .write_all(line.as_bytes())
            .await
            .map_err(|e| MessageError::SendFailed(e.to_string()))?;
        stdout
            .flush()
            .await
            .map_err(|e| MessageError::SendFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_line_is_single_compact_line() {
        let message = ConfigurationPayload::parse(r#"{ "0": 2, "1": "a b" }"#).unwrap();
        let line = StdoutMessenger::encode_line(&message);
        assert_eq!(line, "{\"0\":2,\"1\":\"a b\"}\n");
        assert_eq!(line.matches('\n').count(), 1);
    }
}
