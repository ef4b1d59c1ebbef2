//! Bridge config file under the XDG config directory
//!
//! A flat TOML table with the four `BridgeConfig` keys. `config init` writes
//! the shipped defaults behind a short header naming each key.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use crate::application::ports::ConfigStore;
use crate::domain::config::BridgeConfig;
use crate::domain::error::ConfigError;

const APP_DIR: &str = "retroclock-companion";
const FILE_NAME: &str = "config.toml";

const HEADER: &str = "\
# retroclock-companion bridge configuration
#
# base_url      configuration page, without query (http or https)
# settings_file settings storage document (default: platform data directory)
# open_browser  open the page on show-configuration
# log_level     trace | debug | info | warn | error (RUST_LOG and -v take precedence)

";

/// Bridge config stored at `$XDG_CONFIG_HOME/retroclock-companion/config.toml`
pub struct XdgConfigStore {
    path: PathBuf,
}

impl XdgConfigStore {
    pub fn new() -> Self {
        Self {
            path: config_root().join(APP_DIR).join(FILE_NAME),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn parse_toml(content: &str) -> Result<BridgeConfig, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.message().to_string()))
    }

    fn render(config: &BridgeConfig, with_header: bool) -> Result<String, ConfigError> {
        let body =
            toml::to_string_pretty(config).map_err(|e| ConfigError::WriteError(e.to_string()))?;
        Ok(if with_header {
            format!("{}{}", HEADER, body)
        } else {
            body
        })
    }

    async fn write(&self, content: String) -> Result<(), ConfigError> {
        let located = |e: io::Error| ConfigError::WriteError(format!("{}: {}", self.path.display(), e));

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await.map_err(located)?;
        }
        fs::write(&self.path, content).await.map_err(located)
    }
}

impl Default for XdgConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

fn config_root() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| Path::new(".").to_path_buf())
}

#[async_trait]
impl ConfigStore for XdgConfigStore {
    async fn load(&self) -> Result<BridgeConfig, ConfigError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no bridge config file");
                return Ok(BridgeConfig::empty());
            }
            Err(e) => {
                return Err(ConfigError::ReadError(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        Self::parse_toml(&content)
    }

    async fn save(&self, config: &BridgeConfig) -> Result<(), ConfigError> {
        self.write(Self::render(config, false)?).await
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    async fn init(&self) -> Result<(), ConfigError> {
        if self.exists() {
            return Err(ConfigError::AlreadyExists(
                self.path.display().to_string(),
            ));
        }

        self.write(Self::render(&BridgeConfig::defaults(), true)?).await
    }
}
