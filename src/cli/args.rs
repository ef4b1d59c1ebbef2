//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// RetroClock companion - configuration bridge for the RetroClock watchface
#[derive(Parser, Debug)]
#[command(name = "retroclock-companion")]
#[command(version)]
#[command(about = "Configuration bridge between the RetroClock watchface and its settings page")]
#[command(long_about = None)]
pub struct Cli {
    /// Settings storage document (default: platform data directory)
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        env = "RETROCLOCK_SETTINGS_FILE"
    )]
    pub settings_file: Option<PathBuf>,

    /// Configuration page URL, without query
    #[arg(long, global = true, value_name = "URL", env = "RETROCLOCK_BASE_URL")]
    pub base_url: Option<String>,

    /// Log bridge activity at debug level
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Companion launched and ready
    Ready,
    /// Open the configuration page pre-filled with current settings
    ShowConfiguration {
        /// Print the URL without opening a browser
        #[arg(long)]
        no_open: bool,
    },
    /// Configuration page closed; apply its response
    WebviewClosed {
        /// Response returned by the page (CANCELLED, {}, or a JSON object)
        #[arg(allow_hyphen_values = true, conflicts_with = "stdin")]
        response: Option<String>,

        /// Read the response from stdin
        #[arg(long)]
        stdin: bool,
    },
    /// Show the stored settings
    Settings,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["base_url", "settings_file", "open_browser", "log_level"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_ready() {
        let cli = Cli::parse_from(["retroclock-companion", "ready"]);
        assert!(matches!(cli.command, Commands::Ready));
        assert!(!cli.verbose);
    }

    #[test]
    fn cli_parses_show_configuration() {
        let cli = Cli::parse_from(["retroclock-companion", "show-configuration", "--no-open"]);
        assert!(matches!(
            cli.command,
            Commands::ShowConfiguration { no_open: true }
        ));
    }

    #[test]
    fn cli_parses_webview_closed_response() {
        let cli = Cli::parse_from(["retroclock-companion", "webview-closed", r#"{"0": 2}"#]);
        if let Commands::WebviewClosed { response, stdin } = cli.command {
            assert_eq!(response, Some(r#"{"0": 2}"#.to_string()));
            assert!(!stdin);
        } else {
            panic!("Expected WebviewClosed command");
        }
    }

    #[test]
    fn cli_parses_webview_closed_without_response() {
        let cli = Cli::parse_from(["retroclock-companion", "webview-closed"]);
        assert!(matches!(
            cli.command,
            Commands::WebviewClosed {
                response: None,
                stdin: false
            }
        ));
    }

    #[test]
    fn cli_rejects_response_with_stdin() {
        let result = Cli::try_parse_from([
            "retroclock-companion",
            "webview-closed",
            "--stdin",
            "CANCELLED",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parses_global_options_after_subcommand() {
        let cli = Cli::parse_from([
            "retroclock-companion",
            "show-configuration",
            "--settings-file",
            "/tmp/storage.json",
            "--base-url",
            "http://localhost/config.html",
            "-v",
        ]);
        assert_eq!(cli.settings_file, Some(PathBuf::from("/tmp/storage.json")));
        assert_eq!(
            cli.base_url,
            Some("http://localhost/config.html".to_string())
        );
        assert!(cli.verbose);
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["retroclock-companion", "config", "set", "open_browser", "false"]);
        if let Commands::Config {
            action: ConfigAction::Set { key, value },
        } = cli.command
        {
            assert_eq!(key, "open_browser");
            assert_eq!(value, "false");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("base_url"));
        assert!(is_valid_config_key("settings_file"));
        assert!(is_valid_config_key("open_browser"));
        assert!(is_valid_config_key("log_level"));
        assert!(!is_valid_config_key("dateformat"));
    }

    #[test]
    fn verify_cli() {
        // Verify the CLI definition is valid
        Cli::command().debug_assert();
    }
}
