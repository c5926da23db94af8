use harbor_core::HarborError;

/// Provider error types
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The caller's context was cancelled or timed out before the
    /// operation completed
    #[error("operation cancelled before completion")]
    Cancelled,

    /// Routing backend error
    #[error("routing error: {0}")]
    Routing(String),

    /// Engine error
    #[error("provider engine error: {0}")]
    Engine(String),

    /// The provider worker has shut down and no longer accepts work
    #[error("provider is shut down")]
    Shutdown,
}

impl ProviderError {
    pub fn routing(msg: impl Into<String>) -> Self {
        Self::Routing(msg.into())
    }

    pub fn engine(msg: impl Into<String>) -> Self {
        Self::Engine(msg.into())
    }
}

impl From<ProviderError> for HarborError {
    fn from(error: ProviderError) -> Self {
        HarborError::Provider(error.to_string())
    }
}

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;
