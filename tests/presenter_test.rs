use std::time::Duration;

use proptest::prelude::*;

use harbor_cli::output::render_provide_stats;
use harbor_provider::ProviderStats;

const KEYS: [&str; 4] = [
    "TotalProvides:",
    "AvgProvideDuration:",
    "LastReprovideDuration:",
    "LastReprovideBatchSize:",
];

proptest! {
    // Whatever the snapshot holds, the presenter emits exactly four rows
    // in fixed order with the values starting in the same column.
    #[test]
    fn test_renders_four_aligned_rows(
        total in any::<u64>(),
        avg_ms in 0u64..100_000_000,
        last_ms in 0u64..100_000_000,
        batch in any::<u64>(),
    ) {
        let stats = ProviderStats {
            total_provides: total,
            avg_provide_duration: Duration::from_millis(avg_ms),
            last_reprovide_duration: Duration::from_millis(last_ms),
            last_reprovide_batch_size: batch,
        };

        let mut buf = Vec::new();
        render_provide_stats(&mut buf, &stats).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        prop_assert_eq!(lines.len(), 4);

        let width = KEYS.iter().map(|key| key.len()).max().unwrap();
        for (line, key) in lines.iter().zip(KEYS) {
            prop_assert!(line.starts_with(key));
            prop_assert!(line[key.len()..width].chars().all(|c| c == ' '));
            prop_assert_eq!(&line[width..width + 1], " ");
            prop_assert!(!line[width + 1..].is_empty());
        }
    }
}
