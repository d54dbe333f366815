//! Full configuration validation.
//!
//! Each section has its own validator; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod endpoint;
mod helpers;


use crate::schema::ChatboxConfig;
use chatbox_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ChatboxConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    endpoint::validate_endpoint(&mut errors, config);
    endpoint::validate_chat(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
