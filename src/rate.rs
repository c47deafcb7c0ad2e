// Counter rate: total delta over elapsed seconds, bounded by the query
// window. Shares the "no rate available" degradation with the trend slope.

/// Earliest/latest counter totals and their hit timestamps for one window.
#[derive(Debug, Clone, Copy)]
pub struct RateSample {
    pub latest_total: f64,
    pub earliest_total: f64,
    /// Timestamp of the latest hit, epoch millis.
    pub latest_ts_ms: i64,
    /// Timestamp of the earliest hit, epoch millis.
    pub earliest_ts_ms: i64,
    pub window_min_ms: i64,
    pub window_max_ms: i64,
}

/// `(latest_total - earliest_total) / elapsed_secs`, with hit timestamps
/// clamped to the window. Zero or negative elapsed time yields `None`.
pub fn rate_per_second(sample: &RateSample) -> Option<f64> {
    if sample.window_min_ms > sample.window_max_ms {
        return None;
    }
    let latest = sample
        .latest_ts_ms
        .clamp(sample.window_min_ms, sample.window_max_ms);
    let earliest = sample
        .earliest_ts_ms
        .clamp(sample.window_min_ms, sample.window_max_ms);
    let elapsed_ms = latest - earliest;
    if elapsed_ms <= 0 {
        return None;
    }
    Some((sample.latest_total - sample.earliest_total) / (elapsed_ms as f64 / 1000.0))
}
