//! RetroClock companion CLI entry point

use std::process::ExitCode;

use clap::Parser;

use retroclock_companion::cli::{
    app::load_merged_config,
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    logging::init_logging,
    presenter::Presenter,
    run_ready, run_show_configuration, run_show_settings, run_webview_closed, HostOptions,
    EXIT_ERROR, EXIT_USAGE_ERROR,
};
use retroclock_companion::domain::config::BridgeConfig;
use retroclock_companion::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Build CLI config from args (clap already folded in the environment)
    let cli_config = BridgeConfig {
        base_url: cli.base_url.clone(),
        settings_file: cli
            .settings_file
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned()),
        ..Default::default()
    };

    let config = load_merged_config(cli_config).await;
    init_logging(cli.verbose, config.log_level_or_default());

    let host = config.resolve_base_url().map(|base_url| HostOptions {
        base_url,
        settings_file: config.settings_file_path(),
        open_browser: config.open_browser_or_default(),
    });

    match (cli.command, host) {
        // Config management needs no bridge and must work with a bad base URL
        (Commands::Config { action }, _) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        (_, Err(e)) => {
            presenter.error(&format!("Invalid base URL: {}", e));
            ExitCode::from(EXIT_USAGE_ERROR)
        }
        (Commands::Ready, Ok(options)) => run_ready(&options),
        (Commands::ShowConfiguration { no_open }, Ok(mut options)) => {
            options.open_browser &= !no_open;
            run_show_configuration(&options).await
        }
        (Commands::WebviewClosed { response, stdin }, Ok(options)) => {
            run_webview_closed(&options, response, stdin).await
        }
        (Commands::Settings, Ok(options)) => run_show_settings(&options).await,
    }
}
