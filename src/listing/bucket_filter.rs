// Bucket partiality: only buckets whose span lies wholly inside the window
// count toward statistics. Edge buckets clipped by rounding are configurable.

use crate::models::Bucket;

use super::{ListingOptions, ListingWindow};

/// Flags whether a bucket's `[key, key + span]` lies inside `[min, max]`.
/// `ignore_early` keeps the first bucket even when rounding pushed its start
/// before `min`; `include_trailing_partial` does the same for a final bucket
/// overrunning `max`.
#[derive(Debug, Clone, Copy)]
pub struct WindowFilter {
    min_ms: i64,
    max_ms: i64,
    span_ms: i64,
    ignore_early: bool,
    include_trailing_partial: bool,
}

impl WindowFilter {
    /// Callers must run `ListingWindow::validate` first; a zero bucket size
    /// here would make every bucket look whole at the window edge.
    pub fn new(window: &ListingWindow, options: ListingOptions) -> Self {
        Self {
            min_ms: window.min_ms,
            max_ms: window.max_ms,
            span_ms: (window.bucket_size_secs as i64) * 1000,
            ignore_early: options.ignore_early,
            include_trailing_partial: options.include_trailing_partial,
        }
    }

    /// Whether the bucket at `index` is whole. Takes the full series because
    /// the edge allowances only apply to the first and last positions.
    pub fn is_whole_at(&self, buckets: &[Bucket], index: usize) -> bool {
        let bucket = &buckets[index];
        let start = bucket.key;
        let end = start + self.span_ms;
        if start >= self.min_ms && end <= self.max_ms {
            return true;
        }
        if self.ignore_early && start < self.min_ms && index == 0 {
            return true;
        }
        if self.include_trailing_partial
            && start >= self.min_ms
            && end > self.max_ms
            && index + 1 == buckets.len()
        {
            return true;
        }
        false
    }
}
