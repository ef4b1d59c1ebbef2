//! No-op surface adapter

use async_trait::async_trait;
use url::Url;

use crate::application::ports::{ExternalSurface, SurfaceError};

/// Surface adapter that does nothing
///
/// Used when the host presents the URL itself (`--no-open`).
pub struct NoOpSurface;

impl NoOpSurface {
    /// Create a new no-op surface adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpSurface {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExternalSurface for NoOpSurface {
    async fn open_url(&self, _url: &Url) -> Result<(), SurfaceError> {
        Ok(())
    }
}
