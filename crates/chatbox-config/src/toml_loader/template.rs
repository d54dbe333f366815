//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Chatbox Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[endpoint]
url = "http://127.0.0.1:3000/api/chat"
# timeout_secs = 30          # 1-600
# connect_timeout_secs = 10  # 1-120

[chat]
# greeting = "Hello! How can I assist you today?"
# overlap = "discard_stale"  # discard_stale, arrival_order
# notification_capacity = 8  # 1-64

[logging]
# level = "INFO"             # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
