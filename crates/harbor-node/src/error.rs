use harbor_core::HarborError;
use harbor_provider::ProviderError;

/// Node error types
#[derive(Debug, thiserror::Error)]
pub enum NodeError {
    /// No node is bound to the command environment
    #[error("no node is attached to this command environment")]
    Unavailable,

    /// The node is running in offline mode
    #[error("this action must be run in online mode")]
    Offline,

    /// The configured provider is not the batched variant
    #[error("provide stats are only available when the batched provider is enabled (set provider.mode = \"batched\")")]
    UnsupportedProvider,

    /// The underlying stats fetch failed or was cancelled
    #[error("failed to fetch provide statistics: {0}")]
    StatsFetch(ProviderError),
}

impl From<NodeError> for HarborError {
    fn from(error: NodeError) -> Self {
        match error {
            NodeError::StatsFetch(e) => {
                HarborError::Provider(format!("failed to fetch provide statistics: {}", e))
            }
            other => HarborError::Node(other.to_string()),
        }
    }
}

/// Result type for node operations
pub type NodeResult<T> = Result<T, NodeError>;
