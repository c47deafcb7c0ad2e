// Aggregation response shapes from the search engine.
// One Bucket per date-histogram slice; series arrive per item, per metric id.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Plain metric sub-aggregation: one aggregated number, null when the bucket
/// matched no documents.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MetricValue {
    #[serde(default)]
    pub value: Option<f64>,
}

/// Derivative sub-aggregation: raw delta between consecutive buckets plus the
/// per-second normalized form.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DerivativeValue {
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub normalized_value: Option<f64>,
}

/// One date-histogram time slice. `key` is the bucket start in epoch millis;
/// buckets within a series are ordered by ascending `key`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Bucket {
    pub key: i64,
    #[serde(default)]
    pub doc_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<MetricValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric_deriv: Option<DerivativeValue>,
}

/// Bucket array for one item/metric pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricSeries {
    #[serde(default)]
    pub buckets: Vec<Bucket>,
}

/// One terms-aggregation entry: an index name or node id plus its per-metric
/// histogram series, keyed by metric id (flattened, as the engine emits them).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingItem {
    pub key: String,
    #[serde(default)]
    pub doc_count: u64,
    #[serde(flatten)]
    pub series: HashMap<String, MetricSeries>,
}
