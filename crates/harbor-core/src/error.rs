use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom result type for Harbor operations
pub type HarborResult<T> = Result<T, HarborError>;

/// Custom error type for Harbor operations
#[derive(Debug, Error)]
pub enum HarborError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid content key: {0}")]
    InvalidKey(String),

    #[error("Invalid path: {0}")]
    InvalidPath(PathBuf),

    #[error("Node error: {0}")]
    Node(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl HarborError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        HarborError::Config(msg.into())
    }

    /// Create a new invalid-key error
    pub fn invalid_key<S: Into<String>>(msg: S) -> Self {
        HarborError::InvalidKey(msg.into())
    }

    /// Create a new node error
    pub fn node<S: Into<String>>(msg: S) -> Self {
        HarborError::Node(msg.into())
    }

    /// Create a new provider error
    pub fn provider<S: Into<String>>(msg: S) -> Self {
        HarborError::Provider(msg.into())
    }

    /// Create a new other error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        HarborError::Other(msg.into())
    }
}

impl From<io::Error> for HarborError {
    fn from(err: io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for HarborError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for HarborError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for HarborError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
