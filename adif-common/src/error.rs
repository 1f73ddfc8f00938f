//! Common error types for the ADIF award service

use thiserror::Error;

/// Common result type for ADIF operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types shared by the service crates
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed ADIF content
    #[error("ADIF parse error: {0}")]
    Parse(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Caller passed a value outside an operation's contract
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}
