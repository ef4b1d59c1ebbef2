//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::{parse_base_url, VALID_LOG_LEVELS};
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;
    validate_config_value(key, value)?;

    let mut config = store.load().await?;

    match key {
        "base_url" => config.base_url = Some(value.to_string()),
        "settings_file" => config.settings_file = Some(value.to_string()),
        "open_browser" => config.open_browser = Some(parse_bool(value).map_err(|_| bool_error(key))?),
        "log_level" => config.log_level = Some(value.to_lowercase()),
        _ => unreachable!(), // Already validated
    }

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    let config = store.load().await?;

    let value = match key {
        "base_url" => config.base_url,
        "settings_file" => config.settings_file,
        "open_browser" => config.open_browser.map(|b| b.to_string()),
        "log_level" => config.log_level,
        _ => unreachable!(),
    };

    match value {
        Some(v) => presenter.output(&v),
        None => presenter.output("(not set)"),
    }

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    presenter.key_value("base_url", config.base_url.as_deref().unwrap_or("(not set)"));
    presenter.key_value(
        "settings_file",
        config.settings_file.as_deref().unwrap_or("(not set)"),
    );
    presenter.key_value(
        "open_browser",
        &config
            .open_browser
            .map(|b| b.to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
    );
    presenter.key_value("log_level", config.log_level.as_deref().unwrap_or("(not set)"));

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn check_key(key: &str) -> Result<(), ConfigError> {
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }
    Ok(())
}

/// Validate a config value based on key type
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "base_url" => {
            parse_base_url(value).map_err(|message| ConfigError::ValidationError {
                key: key.to_string(),
                message,
            })?;
        }
        "open_browser" => {
            parse_bool(value).map_err(|_| bool_error(key))?;
        }
        "log_level" => {
            let lower = value.to_lowercase();
            if !VALID_LOG_LEVELS.contains(&lower.as_str()) {
                return Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: format!(
                        "Invalid value '{}'. Valid options: {}",
                        value,
                        VALID_LOG_LEVELS.join(", ")
                    ),
                });
            }
        }
        "settings_file" => {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Path must not be empty".to_string(),
                });
            }
        }
        _ => {}
    }
    Ok(())
}

fn bool_error(key: &str) -> ConfigError {
    ConfigError::ValidationError {
        key: key.to_string(),
        message: "Value must be 'true' or 'false'".to_string(),
    }
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(()),
    }
}
