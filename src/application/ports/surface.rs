//! External surface port interface

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

/// External surface errors
#[derive(Debug, Clone, Error)]
pub enum SurfaceError {
    #[error("Failed to open {url}: {message}")]
    OpenFailed { url: String, message: String },
}

/// Port for presenting the configuration page to the user
#[async_trait]
pub trait ExternalSurface: Send + Sync {
    /// Open a URL in a browser or webview.
    ///
    /// # Arguments
    /// * `url` - The configuration page URL
    ///
    /// # Returns
    /// Ok(()) once the request was handed off, error otherwise
    async fn open_url(&self, url: &Url) -> Result<(), SurfaceError>;
}

/// Blanket implementation for boxed surface types
#[async_trait]
impl ExternalSurface for Box<dyn ExternalSurface> {
    async fn open_url(&self, url: &Url) -> Result<(), SurfaceError> {
        self.as_ref().open_url(url).await
    }
}
