// Per-metric statistics over one bucket series.
// Nodes are trend entities (min/max/slope/last over whole buckets); indices
// are snapshots (latest whole non-empty value only).

use crate::models::{Bucket, MetricDef, MetricStats};

use super::bucket_filter::WindowFilter;

/// Which listing is being built; selects the statistics algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingKind {
    Nodes,
    Indices,
}

impl ListingKind {
    pub fn compute_stats(
        self,
        buckets: &[Bucket],
        metric: &MetricDef,
        filter: &WindowFilter,
    ) -> MetricStats {
        match self {
            ListingKind::Nodes => trend_stats(buckets, metric.derivative, filter),
            ListingKind::Indices => snapshot_stats(buckets, metric.derivative, filter),
        }
    }
}

/// Derivative metrics read the per-second normalized value when present, then
/// the raw delta; everything else reads the plain aggregate. A bucket with no
/// value maps to 0.0 so the trend series stays dense.
fn bucket_value(bucket: &Bucket, derivative: bool) -> f64 {
    if derivative && let Some(deriv) = &bucket.metric_deriv {
        if let Some(normalized) = deriv.normalized_value {
            return normalized;
        }
        if let Some(value) = deriv.value {
            return value;
        }
    }
    bucket.metric.as_ref().and_then(|m| m.value).unwrap_or(0.0)
}

fn trend_stats(buckets: &[Bucket], derivative: bool, filter: &WindowFilter) -> MetricStats {
    let points: Vec<(f64, f64)> = buckets
        .iter()
        .enumerate()
        .filter(|(index, _)| filter.is_whole_at(buckets, *index))
        .map(|(_, bucket)| (bucket.key as f64, bucket_value(bucket, derivative)))
        .collect();
    if points.is_empty() {
        return MetricStats::default();
    }

    let min = points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
    let max = points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
    let last = points[points.len() - 1].1;

    MetricStats {
        min: Some(min),
        max: Some(max),
        slope: Some(trend_slope(&points)),
        last: Some(last),
    }
}

/// Least-squares trend over (timestamp, value) points. The denominator keeps
/// the Σx·Σy cross term the shipped dashboards compute; swapping in the
/// textbook (Σx)² changes every rendered trend arrow. See DESIGN.md.
/// A degenerate denominator yields a non-finite slope, surfaced as-is.
fn trend_slope(points: &[(f64, f64)]) -> f64 {
    let n = points.len() as f64;
    let sum_x: f64 = points.iter().map(|p| p.0).sum();
    let sum_y: f64 = points.iter().map(|p| p.1).sum();
    let sum_xy: f64 = points.iter().map(|p| p.0 * p.1).sum();
    let sum_x2: f64 = points.iter().map(|p| p.0 * p.0).sum();
    (n * sum_xy - sum_x * sum_y) / (n * sum_x2 - sum_x * sum_y)
}

/// Latest whole, non-empty bucket wins; empty and partial buckets are skipped
/// scanning backward. Trend fields stay unset for snapshots.
fn snapshot_stats(buckets: &[Bucket], derivative: bool, filter: &WindowFilter) -> MetricStats {
    let last = buckets
        .iter()
        .enumerate()
        .rev()
        .find(|(index, bucket)| bucket.doc_count > 0 && filter.is_whole_at(buckets, *index))
        .map(|(_, bucket)| bucket_value(bucket, derivative));

    MetricStats {
        last,
        ..MetricStats::default()
    }
}
