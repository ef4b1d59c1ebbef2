//! External surface infrastructure module

mod browser;
mod noop;

pub use browser::BrowserSurface;
pub use noop::NoOpSurface;

use crate::application::ports::ExternalSurface;

/// Create the surface adapter for the given preference
pub fn create_surface(open_browser: bool) -> Box<dyn ExternalSurface> {
    if open_browser {
        Box::new(BrowserSurface::new())
    } else {
        Box::new(NoOpSurface::new())
    }
}
