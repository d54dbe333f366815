pub mod errors;
pub mod id;
pub mod notifications;

pub use errors::{ChatboxError, ConfigError};
pub use id::{new_correlation_id, new_id, SessionId};
pub use notifications::{Notification, NotificationLevel, NotificationQueue};

pub type Result<T> = std::result::Result<T, ChatboxError>;
