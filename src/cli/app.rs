//! Host runners for the lifecycle events
//!
//! Each invocation of the binary delivers one event to the bridge, the way
//! the phone runtime would: ready, show-configuration, webview-closed.

use std::path::PathBuf;
use std::process::ExitCode;

use tokio::io::{self, AsyncReadExt};
use url::Url;

use crate::application::ports::{ConfigStore, ExternalSurface, SettingsStore};
use crate::application::{ClosureOutcome, ConfigurationBridge, IgnoreReason};
use crate::domain::config::BridgeConfig;
use crate::infrastructure::{create_surface, FileSettingsStore, StdoutMessenger, XdgConfigStore};

use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Resolved options shared by the event runners
#[derive(Debug, Clone)]
pub struct HostOptions {
    pub base_url: Url,
    pub settings_file: Option<PathBuf>,
    pub open_browser: bool,
}

type HostBridge = ConfigurationBridge<FileSettingsStore, Box<dyn ExternalSurface>, StdoutMessenger>;

fn settings_store(options: &HostOptions) -> FileSettingsStore {
    match options.settings_file {
        Some(ref path) => FileSettingsStore::with_path(path),
        None => FileSettingsStore::new(),
    }
}

fn create_bridge(options: &HostOptions) -> HostBridge {
    ConfigurationBridge::new(
        settings_store(options),
        create_surface(options.open_browser),
        StdoutMessenger::new(),
        options.base_url.clone(),
    )
}

/// Deliver the ready event
pub fn run_ready(options: &HostOptions) -> ExitCode {
    create_bridge(options).on_ready();
    ExitCode::from(EXIT_SUCCESS)
}

/// Deliver a configuration request and print the page URL
pub async fn run_show_configuration(options: &HostOptions) -> ExitCode {
    let presenter = Presenter::new();
    let url = create_bridge(options).on_configuration_requested().await;
    presenter.output(url.as_str());
    ExitCode::from(EXIT_SUCCESS)
}

/// Deliver a closure event.
///
/// Always succeeds: every anomaly in the response is a no-op for the bridge.
pub async fn run_webview_closed(
    options: &HostOptions,
    response: Option<String>,
    from_stdin: bool,
) -> ExitCode {
    let presenter = Presenter::new();

    let response = if from_stdin {
        match read_stdin().await {
            Ok(text) => Some(text),
            Err(e) => {
                presenter.error(&format!("Failed to read response from stdin: {}", e));
                return ExitCode::from(EXIT_ERROR);
            }
        }
    } else {
        response
    };

    let outcome = create_bridge(options)
        .on_configuration_closed(response.as_deref())
        .await;

    match &outcome {
        ClosureOutcome::Applied {
            persisted: true,
            forwarded: true,
            ..
        } => presenter.success(&describe_outcome(&outcome)),
        ClosureOutcome::Applied { .. } => presenter.warn(&describe_outcome(&outcome)),
        ClosureOutcome::Ignored(_) => presenter.info(&describe_outcome(&outcome)),
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Print the stored settings record
pub async fn run_show_settings(options: &HostOptions) -> ExitCode {
    let presenter = Presenter::new();

    match settings_store(options).load().await {
        Some(record) => {
            presenter.key_value("settings", record.as_str());
            presenter.key_value("dateformat", &record.dateformat_or_default().to_string());
        }
        None => {
            presenter.key_value("settings", "(not set)");
            presenter.key_value("dateformat", "0 (default)");
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// One-line summary of a closure outcome
pub fn describe_outcome(outcome: &ClosureOutcome) -> String {
    match outcome {
        ClosureOutcome::Ignored(IgnoreReason::Empty) => "No response, nothing to apply".to_string(),
        ClosureOutcome::Ignored(IgnoreReason::Cancelled) => "Configuration cancelled".to_string(),
        ClosureOutcome::Ignored(IgnoreReason::Unchanged) => "Settings unchanged".to_string(),
        ClosureOutcome::Ignored(IgnoreReason::Malformed(e)) => {
            format!("Ignored malformed response: {}", e)
        }
        ClosureOutcome::Applied {
            dateformat,
            persisted,
            forwarded,
        } => {
            let mut summary = match dateformat {
                Some(d) => format!("Settings applied (dateformat {})", d),
                None => "Settings applied".to_string(),
            };
            if !persisted {
                summary.push_str(", not saved");
            }
            if !forwarded {
                summary.push_str(", not delivered to watch");
            }
            summary
        }
    }
}

async fn read_stdin() -> std::io::Result<String> {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text).await?;
    Ok(text.trim_end_matches(['\r', '\n']).to_string())
}

/// Load and merge configuration from file and CLI (CLI includes env)
pub async fn load_merged_config(cli_config: BridgeConfig) -> BridgeConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| BridgeConfig::empty());

    // Merge: defaults < file < cli
    BridgeConfig::defaults()
        .merge(file_config)
        .merge(cli_config)
}
