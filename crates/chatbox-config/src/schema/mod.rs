//! Configuration schema types for the chat widget.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod chat;
mod endpoint;
mod logging;

pub use chat::*;
pub use endpoint::*;
pub use logging::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatboxConfig {
    pub endpoint: EndpointConfig,
    pub chat: ChatConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
