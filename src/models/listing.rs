// Listing output: one row per item, one stats cell per requested metric.
// Absent statistics serialize as omitted fields; the renderer shows N/A.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::MetricDescriptor;

/// Summary statistics for one item/metric pair. A non-finite slope means
/// the trend is degenerate; serde_json writes it as null.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slope: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<f64>,
}

/// One cell: the display descriptor plus the computed stats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricSummary {
    pub metric: MetricDescriptor,
    #[serde(flatten)]
    pub stats: MetricStats,
}

/// One listing row. `metrics` is a BTreeMap so serialized rows are stable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingRow {
    pub name: String,
    pub metrics: BTreeMap<String, MetricSummary>,
}
