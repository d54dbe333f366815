//! Validation for the endpoint and chat sections.

use crate::schema::{ChatboxConfig, CONNECT_TIMEOUT_SECS_RANGE, TIMEOUT_SECS_RANGE};

use super::helpers::{validate_not_blank, validate_range};

/// Validate endpoint URL shape and timeouts.
pub(crate) fn validate_endpoint(errors: &mut Vec<String>, config: &ChatboxConfig) {
    let url = config.endpoint.url.trim();
    if url.is_empty() {
        errors.push("endpoint.url must not be empty".into());
    } else if !(url.starts_with("http://") || url.starts_with("https://")) {
        errors.push(format!(
            "endpoint.url = {url:?} must start with http:// or https://"
        ));
    }

    validate_range(
        errors,
        "endpoint.timeout_secs",
        config.endpoint.timeout_secs,
        TIMEOUT_SECS_RANGE.0,
        TIMEOUT_SECS_RANGE.1,
    );
    validate_range(
        errors,
        "endpoint.connect_timeout_secs",
        config.endpoint.connect_timeout_secs,
        CONNECT_TIMEOUT_SECS_RANGE.0,
        CONNECT_TIMEOUT_SECS_RANGE.1,
    );
}

/// Validate chat session constraints.
pub(crate) fn validate_chat(errors: &mut Vec<String>, config: &ChatboxConfig) {
    validate_not_blank(errors, "chat.greeting", &config.chat.greeting);
    validate_range(
        errors,
        "chat.notification_capacity",
        config.chat.notification_capacity,
        1,
        64,
    );
}
