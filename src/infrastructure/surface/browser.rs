//! Default-browser surface adapter using the `open` crate

use async_trait::async_trait;
use url::Url;

use crate::application::ports::{ExternalSurface, SurfaceError};

/// Opens the configuration page in the system's default browser
pub struct BrowserSurface;

impl BrowserSurface {
    /// Create a new browser surface adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for BrowserSurface {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExternalSurface for BrowserSurface {
    async fn open_url(&self, url: &Url) -> Result<(), SurfaceError> {
        let target = url.to_string();
        let failed = |message: String| SurfaceError::OpenFailed {
            url: url.to_string(),
            message,
        };

        // Launching the browser blocks until the opener returns
        tokio::task::spawn_blocking(move || open::that(target))
            .await
            .map_err(|e| failed(format!("Task join error: {}", e)))?
            .map_err(|e| failed(e.to_string()))
    }
}
