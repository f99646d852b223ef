use std::io;

/// Errors that can occur during testit operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The type signature produced no tokens. Carries the offending input.
    #[error("input could not be parsed: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for testit operations
pub type Result<T> = std::result::Result<T, Error>;
