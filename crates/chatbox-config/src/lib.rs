//! Chatbox configuration system.
//!
//! Provides TOML-based configuration for the reply endpoint, the chat
//! session, and logging. All sections use sensible defaults so partial
//! configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use chatbox_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    ChatConfig, ChatboxConfig, EndpointConfig, LogLevel, LoggingConfig, OverlapPolicy,
    CONFIG_SCHEMA_VERSION,
};

use std::path::Path;

use chatbox_common::ConfigError;

/// Environment variable that overrides `endpoint.url`.
pub const ENDPOINT_ENV: &str = "CHATBOX_ENDPOINT";

/// Load config from `path`, or from the platform default path when `None`.
///
/// Applies the `CHATBOX_ENDPOINT` override afterwards. Validation problems
/// are logged by the loader, not returned.
pub fn load_config(path: Option<&Path>) -> Result<ChatboxConfig, ConfigError> {
    let mut config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };
    apply_endpoint_override(&mut config, std::env::var(ENDPOINT_ENV).ok());
    Ok(config)
}

/// Replace `endpoint.url` when an override is present and non-blank.
pub fn apply_endpoint_override(config: &mut ChatboxConfig, url: Option<String>) {
    if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
        tracing::info!("endpoint overridden: {url}");
        config.endpoint.url = url;
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &ChatboxConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
