use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ChatboxError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("runtime error: {0}")]
    Runtime(String),

    #[error("reply endpoint error: {0}")]
    Endpoint(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("endpoint.url is empty".into());
        assert_eq!(
            err.to_string(),
            "config validation error: endpoint.url is empty"
        );
    }

    #[test]
    fn chatbox_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: ChatboxError = config_err.into();
        assert!(matches!(err, ChatboxError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn chatbox_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ChatboxError = io_err.into();
        assert!(matches!(err, ChatboxError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn chatbox_error_string_variants() {
        let err = ChatboxError::Runtime("no reactor".into());
        assert_eq!(err.to_string(), "runtime error: no reactor");

        let err = ChatboxError::Endpoint("invalid url".into());
        assert_eq!(err.to_string(), "reply endpoint error: invalid url");
    }
}
