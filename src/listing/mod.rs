// Listing mapper: one row per index/node, one stats cell per requested
// metric. Pure per-request transform; the HTTP layer owns I/O and errors
// other than bad window parameters.

pub mod bucket_filter;
pub mod calculator;

use std::collections::BTreeMap;

use thiserror::Error;

use crate::models::{ListingItem, ListingRow, MetricRegistry, MetricSummary};

use bucket_filter::WindowFilter;
use calculator::ListingKind;

/// Requested time window and histogram resolution.
#[derive(Debug, Clone, Copy)]
pub struct ListingWindow {
    /// Inclusive lower bound, epoch millis.
    pub min_ms: i64,
    /// Inclusive upper bound, epoch millis.
    pub max_ms: i64,
    pub bucket_size_secs: u64,
}

impl ListingWindow {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.bucket_size_secs == 0 {
            return Err(ConfigurationError::ZeroBucketSize);
        }
        if self.min_ms > self.max_ms {
            return Err(ConfigurationError::InvertedWindow {
                min: self.min_ms,
                max: self.max_ms,
            });
        }
        Ok(())
    }
}

/// Partiality knobs, mirrored from the [listing] config section.
#[derive(Debug, Clone, Copy)]
pub struct ListingOptions {
    pub ignore_early: bool,
    pub include_trailing_partial: bool,
}

impl Default for ListingOptions {
    fn default() -> Self {
        Self {
            ignore_early: true,
            include_trailing_partial: false,
        }
    }
}

/// Rejected window parameters. Everything else (unknown metric ids, missing
/// or empty series) degrades to absent fields instead of failing the request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("bucket size must be greater than zero")]
    ZeroBucketSize,
    #[error("window min {min} must not exceed max {max}")]
    InvertedWindow { min: i64, max: i64 },
}

/// Maps a terms+date-histogram aggregation response to listing rows, one per
/// item, preserving item order.
pub fn map_listing(
    kind: ListingKind,
    items: &[ListingItem],
    metric_ids: &[String],
    window: ListingWindow,
    registry: &MetricRegistry,
    options: ListingOptions,
) -> Result<Vec<ListingRow>, ConfigurationError> {
    window.validate()?;
    let filter = WindowFilter::new(&window, options);

    let mut rows: Vec<ListingRow> = Vec::with_capacity(items.len());
    for item in items {
        let mut metrics: BTreeMap<String, MetricSummary> = BTreeMap::new();
        for id in metric_ids {
            let Some(def) = registry.lookup(id) else {
                tracing::debug!(metric = %id, operation = "map_listing", "unknown metric id; skipping");
                continue;
            };
            let buckets = item
                .series
                .get(id)
                .map(|series| series.buckets.as_slice())
                .unwrap_or(&[]);
            let stats = kind.compute_stats(buckets, def, &filter);
            metrics.insert(
                id.clone(),
                MetricSummary {
                    metric: def.descriptor(),
                    stats,
                },
            );
        }
        rows.push(ListingRow {
            name: item.key.clone(),
            metrics,
        });
    }
    Ok(rows)
}
