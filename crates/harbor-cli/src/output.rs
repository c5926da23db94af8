//! Output formatting utilities for CLI

use std::io::{self, Write};

use console::style;

use harbor_provider::ProviderStats;

/// Render provider stats as aligned `Key: value` text.
///
/// Four lines in fixed order, values lined up on the widest label,
/// durations in humantime notation. The sink is flushed before returning.
pub fn render_provide_stats<W: Write>(w: &mut W, stats: &ProviderStats) -> io::Result<()> {
    let rows = [
        ("TotalProvides", stats.total_provides.to_string()),
        (
            "AvgProvideDuration",
            humantime::format_duration(stats.avg_provide_duration).to_string(),
        ),
        (
            "LastReprovideDuration",
            humantime::format_duration(stats.last_reprovide_duration).to_string(),
        ),
        (
            "LastReprovideBatchSize",
            stats.last_reprovide_batch_size.to_string(),
        ),
    ];

    let width = rows
        .iter()
        .map(|(key, _)| key.len() + 1)
        .max()
        .unwrap_or(0);
    for (key, value) in &rows {
        writeln!(w, "{:<width$} {}", format!("{}:", key), value, width = width)?;
    }
    w.flush()
}

/// Render provider stats as a single JSON object, field names preserved
pub fn render_provide_stats_json<W: Write>(w: &mut W, stats: &ProviderStats) -> io::Result<()> {
    serde_json::to_writer(&mut *w, stats).map_err(io::Error::from)?;
    writeln!(w)?;
    w.flush()
}

/// Format an error message
pub fn format_error(msg: &str) -> String {
    style(format!("Error: {}", msg)).red().to_string()
}

/// Format a success message
pub fn format_success(msg: &str) -> String {
    style(format!("Success: {}", msg)).green().to_string()
}

/// Format an info message
pub fn format_info(msg: &str) -> String {
    style(msg).blue().to_string()
}
