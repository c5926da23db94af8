use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use harbor_core::ContentKey;
use harbor_provider::{
    BatchedConfig, BatchedProvider, ContentRouting, ProviderError, ProviderResult, ProviderStats,
    StatContext,
};

#[derive(Debug, Default)]
struct CountingRouting {
    calls: AtomicU64,
    delay: Option<Duration>,
}

impl CountingRouting {
    fn slow(delay: Duration) -> Self {
        Self {
            calls: AtomicU64::new(0),
            delay: Some(delay),
        }
    }

    fn call_count(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentRouting for CountingRouting {
    async fn provide(&self, _key: &ContentKey) -> ProviderResult<()> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn key(name: &str) -> ContentKey {
    ContentKey::new(name).unwrap()
}

async fn wait_for(provider: &BatchedProvider, pred: impl Fn(&ProviderStats) -> bool) -> ProviderStats {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    loop {
        let stats = provider.stat(&StatContext::background()).await.unwrap();
        if pred(&stats) {
            return stats;
        }
        assert!(
            tokio::time::Instant::now() < deadline,
            "condition not met in time: {:?}",
            stats
        );
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

#[tokio::test]
async fn test_flush_when_batch_fills() {
    let routing = Arc::new(CountingRouting::default());
    let config = BatchedConfig {
        batch_size: 2,
        batch_interval: Duration::from_secs(3600),
        reprovide_interval: Duration::from_secs(3600),
    };
    let (provider, _worker) =
        BatchedProvider::spawn(config, Arc::clone(&routing) as _, CancellationToken::new());

    provider.enqueue_provide(key("key-a")).await.unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;
    let stats = provider.stat(&StatContext::background()).await.unwrap();
    assert_eq!(stats.total_provides, 0, "partial batch must not flush");

    provider.enqueue_provide(key("key-b")).await.unwrap();
    let stats = wait_for(&provider, |s| s.total_provides == 2).await;
    assert_eq!(stats.total_provides, 2);
    assert_eq!(routing.call_count(), 2);
}

#[tokio::test]
async fn test_flush_when_interval_elapses() {
    let routing = Arc::new(CountingRouting::default());
    let config = BatchedConfig {
        batch_size: 100,
        batch_interval: Duration::from_millis(30),
        reprovide_interval: Duration::from_secs(3600),
    };
    let (provider, _worker) =
        BatchedProvider::spawn(config, routing, CancellationToken::new());

    provider.enqueue_provide(key("key-a")).await.unwrap();
    wait_for(&provider, |s| s.total_provides == 1).await;
}

#[tokio::test]
async fn test_reprovide_sweep_records_batch() {
    let routing = Arc::new(CountingRouting::default());
    let config = BatchedConfig {
        batch_size: 1,
        batch_interval: Duration::from_millis(10),
        reprovide_interval: Duration::from_millis(150),
    };
    let (provider, _worker) =
        BatchedProvider::spawn(config, routing, CancellationToken::new());

    provider.enqueue_provide(key("key-a")).await.unwrap();
    provider.enqueue_provide(key("key-b")).await.unwrap();

    let stats = wait_for(&provider, |s| s.last_reprovide_batch_size == 2).await;
    // Two initial announcements plus a full sweep
    assert!(stats.total_provides >= 4);
}

#[tokio::test]
async fn test_duplicate_keys_tracked_once() {
    let routing = Arc::new(CountingRouting::default());
    let config = BatchedConfig {
        batch_size: 1,
        batch_interval: Duration::from_millis(10),
        reprovide_interval: Duration::from_millis(150),
    };
    let (provider, _worker) =
        BatchedProvider::spawn(config, routing, CancellationToken::new());

    provider.enqueue_provide(key("key-a")).await.unwrap();
    provider.enqueue_provide(key("key-a")).await.unwrap();

    let stats = wait_for(&provider, |s| s.last_reprovide_batch_size > 0).await;
    assert_eq!(stats.last_reprovide_batch_size, 1);
}

#[tokio::test]
async fn test_shutdown_flushes_pending_announcements() {
    let routing = Arc::new(CountingRouting::default());
    let config = BatchedConfig {
        batch_size: 100,
        batch_interval: Duration::from_secs(3600),
        reprovide_interval: Duration::from_secs(3600),
    };
    let cancel = CancellationToken::new();
    let (provider, worker) =
        BatchedProvider::spawn(config, Arc::clone(&routing) as _, cancel.clone());

    for i in 0..3 {
        provider
            .enqueue_provide(key(&format!("key-{}", i)))
            .await
            .unwrap();
    }
    cancel.cancel();
    worker.await.unwrap();

    let stats = provider.stat(&StatContext::background()).await.unwrap();
    assert_eq!(stats.total_provides, 3);
    assert_eq!(routing.call_count(), 3);
}

#[tokio::test]
async fn test_enqueue_after_shutdown_is_rejected() {
    let cancel = CancellationToken::new();
    let (provider, worker) = BatchedProvider::spawn(
        BatchedConfig::default(),
        Arc::new(CountingRouting::default()) as _,
        cancel.clone(),
    );

    cancel.cancel();
    worker.await.unwrap();

    let err = provider.enqueue_provide(key("late-key")).await.unwrap_err();
    assert!(matches!(err, ProviderError::Shutdown));
}

#[tokio::test]
async fn test_avg_duration_reflects_routing_time() {
    let routing = Arc::new(CountingRouting::slow(Duration::from_millis(5)));
    let config = BatchedConfig {
        batch_size: 1,
        batch_interval: Duration::from_millis(10),
        reprovide_interval: Duration::from_secs(3600),
    };
    let (provider, _worker) =
        BatchedProvider::spawn(config, routing, CancellationToken::new());

    provider.enqueue_provide(key("key-a")).await.unwrap();
    provider.enqueue_provide(key("key-b")).await.unwrap();

    let stats = wait_for(&provider, |s| s.total_provides == 2).await;
    assert!(stats.avg_provide_duration >= Duration::from_millis(1));
}
