//! Locating, reading and (on first run) writing the config file.

use std::io;
use std::path::{Path, PathBuf};

use chatbox_common::ConfigError;
use tracing::{info, warn};

use super::template::default_config_toml;
use crate::schema::ChatboxConfig;
use crate::validation;

/// `<config_dir>/chatbox/config.toml`, e.g. `~/.config/chatbox/config.toml`
/// on Linux and `~/Library/Application Support/chatbox/config.toml` on macOS.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("chatbox").join("config.toml"))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory".into()))
}

/// Read and parse a config file. Missing fields take their defaults.
///
/// Values that fail validation are logged and kept.
pub fn load_from_path(path: &Path) -> Result<ChatboxConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("cannot read {}: {e}", path.display())),
    })?;

    let config = parse(&text)?;
    if let Err(e) = validation::validate(&config) {
        warn!(path = %path.display(), "{e}; keeping the parsed values");
    }
    info!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Like [`load_from_path`], but a missing file is first written from the
/// commented template.
pub fn load_or_create(path: &Path) -> Result<ChatboxConfig, ConfigError> {
    match load_from_path(path) {
        Err(ConfigError::FileNotFound(_)) => {
            create_default_config(path)?;
            parse(&default_config_toml())
        }
        other => other,
    }
}

/// Load from [`default_config_path`], creating the file on first run.
pub fn load_default() -> Result<ChatboxConfig, ConfigError> {
    load_or_create(&default_config_path()?)
}

/// Write the commented template to `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_error =
        |e: io::Error| ConfigError::ParseError(format!("cannot write {}: {e}", path.display()));

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }
    std::fs::write(path, default_config_toml()).map_err(write_error)?;

    info!(path = %path.display(), "wrote default config");
    Ok(())
}

fn parse(text: &str) -> Result<ChatboxConfig, ConfigError> {
    toml::from_str(text).map_err(|e| ConfigError::ParseError(format!("invalid TOML: {e}")))
}
