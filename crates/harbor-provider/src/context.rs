use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Cancellation carrier threaded through blocking provider calls.
///
/// Carries a token and an optional deadline. The provider enforces no
/// timeout of its own; any deadline here is the caller's policy.
#[derive(Debug, Clone)]
pub struct StatContext {
    cancel: CancellationToken,
    deadline: Option<Instant>,
}

impl StatContext {
    /// Context that is never cancelled
    pub fn background() -> Self {
        Self {
            cancel: CancellationToken::new(),
            deadline: None,
        }
    }

    /// Context cancelled when `cancel` fires
    pub fn with_cancel(cancel: CancellationToken) -> Self {
        Self {
            cancel,
            deadline: None,
        }
    }

    /// Context cancelled after `timeout` elapses
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            cancel: CancellationToken::new(),
            deadline: Some(Instant::now() + timeout),
        }
    }

    /// Whether the context is already cancelled or past its deadline
    pub fn is_cancelled(&self) -> bool {
        if self.cancel.is_cancelled() {
            return true;
        }
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// Resolves once the context is cancelled or its deadline passes
    pub async fn cancelled(&self) {
        match self.deadline {
            Some(deadline) => {
                tokio::select! {
                    _ = self.cancel.cancelled() => {}
                    _ = tokio::time::sleep_until(deadline) => {}
                }
            }
            None => self.cancel.cancelled().await,
        }
    }
}

impl Default for StatContext {
    fn default() -> Self {
        Self::background()
    }
}
