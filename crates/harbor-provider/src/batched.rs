use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, RwLock};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use harbor_core::{ContentKey, ProviderConfig};

use crate::context::StatContext;
use crate::error::{ProviderError, ProviderResult};
use crate::routing::ContentRouting;
use crate::stats::ProviderStats;

const QUEUE_CAPACITY: usize = 1024;

/// Tuning for the batching worker
#[derive(Debug, Clone)]
pub struct BatchedConfig {
    /// Maximum announcements per batch
    pub batch_size: usize,
    /// How long a partial batch waits before flushing
    pub batch_interval: Duration,
    /// How often every tracked key is re-announced
    pub reprovide_interval: Duration,
}

impl Default for BatchedConfig {
    fn default() -> Self {
        Self {
            batch_size: 128,
            batch_interval: Duration::from_secs(10),
            reprovide_interval: Duration::from_secs(12 * 60 * 60),
        }
    }
}

impl From<&ProviderConfig> for BatchedConfig {
    fn from(config: &ProviderConfig) -> Self {
        Self {
            batch_size: config.batch_size,
            batch_interval: config.batch_interval,
            reprovide_interval: config.reprovide_interval,
        }
    }
}

/// Announcement counters shared between the worker and stat readers
#[derive(Debug, Default)]
struct StatsState {
    total_provides: u64,
    total_provide_time: Duration,
    last_reprovide_duration: Duration,
    last_reprovide_batch_size: u64,
}

impl StatsState {
    fn record_provide(&mut self, elapsed: Duration) {
        self.total_provides += 1;
        self.total_provide_time += elapsed;
    }

    fn record_reprovide(&mut self, announced: u64, elapsed: Duration) {
        self.total_provides += announced;
        self.total_provide_time += elapsed;
        self.last_reprovide_duration = elapsed;
        self.last_reprovide_batch_size = announced;
    }

    fn snapshot(&self) -> ProviderStats {
        let avg_provide_duration = if self.total_provides == 0 {
            Duration::ZERO
        } else {
            Duration::from_nanos(
                (self.total_provide_time.as_nanos() / self.total_provides as u128) as u64,
            )
        };

        ProviderStats {
            total_provides: self.total_provides,
            avg_provide_duration,
            last_reprovide_duration: self.last_reprovide_duration,
            last_reprovide_batch_size: self.last_reprovide_batch_size,
        }
    }
}

/// Provider that groups announcements into batches and periodically
/// re-announces everything it tracks.
///
/// The handle is cheap to clone; all clones feed the same worker. The
/// worker flushes a batch when it reaches `batch_size` or when
/// `batch_interval` elapses with work pending, and runs a reprovide sweep
/// over the tracked key set every `reprovide_interval`. Cancelling the
/// token passed to [`BatchedProvider::spawn`] stops the worker after one
/// final flush of whatever is queued.
#[derive(Clone)]
pub struct BatchedProvider {
    queue_tx: mpsc::Sender<ContentKey>,
    stats: Arc<RwLock<StatsState>>,
}

impl BatchedProvider {
    /// Start the batching worker and return a handle to it
    pub fn spawn(
        config: BatchedConfig,
        routing: Arc<dyn ContentRouting>,
        cancel: CancellationToken,
    ) -> (Self, JoinHandle<()>) {
        let (queue_tx, queue_rx) = mpsc::channel(QUEUE_CAPACITY);
        let stats = Arc::new(RwLock::new(StatsState::default()));

        let worker = Worker {
            config,
            routing,
            cancel,
            stats: Arc::clone(&stats),
            queue_rx,
            pending: Vec::new(),
            tracked: HashSet::new(),
        };
        let handle = tokio::spawn(worker.run());

        (Self { queue_tx, stats }, handle)
    }

    /// Queue `key` for announcement and track it for future reprovide sweeps
    pub async fn enqueue_provide(&self, key: ContentKey) -> ProviderResult<()> {
        self.queue_tx
            .send(key)
            .await
            .map_err(|_| ProviderError::Shutdown)
    }

    /// Take a read-only snapshot of the engine's statistics.
    ///
    /// Observes `ctx`: if the context is cancelled or past its deadline
    /// before the snapshot is taken, returns [`ProviderError::Cancelled`]
    /// and no data. Never mutates engine state.
    pub async fn stat(&self, ctx: &StatContext) -> ProviderResult<ProviderStats> {
        if ctx.is_cancelled() {
            return Err(ProviderError::Cancelled);
        }

        tokio::select! {
            _ = ctx.cancelled() => Err(ProviderError::Cancelled),
            guard = self.stats.read() => Ok(guard.snapshot()),
        }
    }
}

impl fmt::Debug for BatchedProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BatchedProvider").finish_non_exhaustive()
    }
}

struct Worker {
    config: BatchedConfig,
    routing: Arc<dyn ContentRouting>,
    cancel: CancellationToken,
    stats: Arc<RwLock<StatsState>>,
    queue_rx: mpsc::Receiver<ContentKey>,
    pending: Vec<ContentKey>,
    tracked: HashSet<ContentKey>,
}

impl Worker {
    async fn run(mut self) {
        info!(
            batch_size = self.config.batch_size,
            "batched provider worker started"
        );

        // interval_at so neither timer fires at startup
        let mut flush_tick = tokio::time::interval_at(
            Instant::now() + self.config.batch_interval,
            self.config.batch_interval,
        );
        let mut reprovide_tick = tokio::time::interval_at(
            Instant::now() + self.config.reprovide_interval,
            self.config.reprovide_interval,
        );

        loop {
            tokio::select! {
                _ = self.cancel.cancelled() => {
                    self.drain_queue();
                    self.flush().await;
                    break;
                }
                maybe_key = self.queue_rx.recv() => {
                    match maybe_key {
                        Some(key) => {
                            self.tracked.insert(key.clone());
                            self.pending.push(key);
                            if self.pending.len() >= self.config.batch_size {
                                self.flush().await;
                            }
                        }
                        None => {
                            self.flush().await;
                            break;
                        }
                    }
                }
                _ = flush_tick.tick() => {
                    if !self.pending.is_empty() {
                        self.flush().await;
                    }
                }
                _ = reprovide_tick.tick() => {
                    self.reprovide().await;
                }
            }
        }

        info!("batched provider worker stopped");
    }

    /// Move whatever is still queued into the pending batch
    fn drain_queue(&mut self) {
        while let Ok(key) = self.queue_rx.try_recv() {
            self.tracked.insert(key.clone());
            self.pending.push(key);
        }
    }

    async fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }

        let batch = std::mem::take(&mut self.pending);
        debug!(count = batch.len(), "flushing provide batch");

        for key in &batch {
            let started = Instant::now();
            match self.routing.provide(key).await {
                Ok(()) => {
                    self.stats.write().await.record_provide(started.elapsed());
                }
                Err(e) => warn!(%key, "provide failed: {}", e),
            }
        }
    }

    async fn reprovide(&mut self) {
        if self.tracked.is_empty() {
            debug!("no tracked keys, skipping reprovide sweep");
            return;
        }

        let started = Instant::now();
        let keys: Vec<ContentKey> = self.tracked.iter().cloned().collect();
        let mut announced = 0u64;

        for key in &keys {
            match self.routing.provide(key).await {
                Ok(()) => announced += 1,
                Err(e) => warn!(%key, "reprovide failed: {}", e),
            }
        }

        let elapsed = started.elapsed();
        self.stats
            .write()
            .await
            .record_reprovide(announced, elapsed);
        info!(batch = announced, ?elapsed, "reprovide sweep complete");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_averages_over_lifetime() {
        let mut state = StatsState::default();
        state.record_provide(Duration::from_millis(100));
        state.record_provide(Duration::from_millis(200));

        let stats = state.snapshot();
        assert_eq!(stats.total_provides, 2);
        assert_eq!(stats.avg_provide_duration, Duration::from_millis(150));
    }

    #[test]
    fn test_empty_snapshot_is_zeroed() {
        let stats = StatsState::default().snapshot();
        assert_eq!(stats.total_provides, 0);
        assert_eq!(stats.avg_provide_duration, Duration::ZERO);
        assert_eq!(stats.last_reprovide_duration, Duration::ZERO);
        assert_eq!(stats.last_reprovide_batch_size, 0);
    }

    #[test]
    fn test_reprovide_counts_into_totals() {
        let mut state = StatsState::default();
        state.record_provide(Duration::from_millis(50));
        state.record_reprovide(3, Duration::from_millis(150));

        let stats = state.snapshot();
        assert_eq!(stats.total_provides, 4);
        assert_eq!(stats.last_reprovide_batch_size, 3);
        assert_eq!(stats.last_reprovide_duration, Duration::from_millis(150));
        assert_eq!(stats.avg_provide_duration, Duration::from_millis(50));
    }
}
