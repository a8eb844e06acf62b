//! Console output formatting.

use std::time::Duration;

use fibmemo_core::cache::CacheStats;

/// Format a duration for display.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else {
        format!("{secs:.3}s")
    }
}

/// Format the per-calculation details line.
#[must_use]
pub fn format_details(algorithm: &str, elapsed: Duration, stats: CacheStats) -> String {
    format!(
        "  [{algorithm}] {}, cache: {} entries ({} hits, {} misses)",
        format_duration(elapsed),
        stats.entries,
        stats.hits,
        stats.misses
    )
}
