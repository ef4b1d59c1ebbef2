//! Configuration domain module

mod bridge_config;

pub use bridge_config::{
    parse_base_url, BridgeConfig, DEFAULT_BASE_URL, DEFAULT_LOG_LEVEL, VALID_LOG_LEVELS,
};
