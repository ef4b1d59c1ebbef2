//! CLI layer - Command-line interface
//!
//! Acts as the host runtime: argument parsing, output formatting, logging
//! setup and one runner per lifecycle event.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod logging;
pub mod presenter;

// Re-export commonly used types
pub use app::{
    run_ready, run_show_configuration, run_show_settings, run_webview_closed, HostOptions,
    EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR,
};
pub use args::{Cli, Commands, ConfigAction};
pub use presenter::Presenter;
