use std::time::Duration;

use serde::{Deserialize, Serialize};

use harbor_core::types::duration_str;

/// Point-in-time snapshot of the batched provider's activity.
///
/// Snapshots are fresh values owned by the caller; taking one never mutates
/// engine state. `total_provides` counts every announcement the engine has
/// made since it started, reprovide sweeps included, and never decreases
/// across snapshots from a live engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderStats {
    /// Cumulative announcement count since the engine started
    #[serde(rename = "TotalProvides")]
    pub total_provides: u64,
    /// Lifetime mean wall-clock time per announcement
    #[serde(rename = "AvgProvideDuration", with = "duration_str")]
    pub avg_provide_duration: Duration,
    /// Wall-clock time of the most recent reprovide sweep
    #[serde(rename = "LastReprovideDuration", with = "duration_str")]
    pub last_reprovide_duration: Duration,
    /// Number of keys announced by the most recent reprovide sweep
    #[serde(rename = "LastReprovideBatchSize")]
    pub last_reprovide_batch_size: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_field_names() {
        let stats = ProviderStats {
            total_provides: 42,
            avg_provide_duration: Duration::from_millis(150),
            last_reprovide_duration: Duration::from_secs(2),
            last_reprovide_batch_size: 17,
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["TotalProvides"], 42);
        assert_eq!(json["AvgProvideDuration"], "150ms");
        assert_eq!(json["LastReprovideDuration"], "2s");
        assert_eq!(json["LastReprovideBatchSize"], 17);
    }

    #[test]
    fn test_json_round_trip() {
        let stats = ProviderStats {
            total_provides: 7,
            avg_provide_duration: Duration::from_micros(1200),
            last_reprovide_duration: Duration::ZERO,
            last_reprovide_batch_size: 0,
        };
        let json = serde_json::to_string(&stats).unwrap();
        let back: ProviderStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stats);
    }
}
