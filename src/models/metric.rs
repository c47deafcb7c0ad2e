// Metric registry: static descriptors keyed by metric id.
// The registry is passed into the mapper explicitly so tests can swap it out.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Aggregation used to collapse raw documents into one value per bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricAgg {
    Max,
    Min,
    Avg,
    Sum,
}

/// Full metric definition: query-side plumbing plus display fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricDef {
    pub field: String,
    pub metric_agg: MetricAgg,
    /// When set, the displayed value is the per-second rate of change between
    /// consecutive buckets rather than the raw aggregate.
    #[serde(default)]
    pub derivative: bool,
    pub label: String,
    #[serde(default)]
    pub description: String,
    pub units: String,
    pub format: String,
}

impl MetricDef {
    /// Display subset embedded in listing rows; query plumbing stays out.
    pub fn descriptor(&self) -> MetricDescriptor {
        MetricDescriptor {
            field: self.field.clone(),
            label: self.label.clone(),
            description: self.description.clone(),
            units: self.units.clone(),
            format: self.format.clone(),
        }
    }
}

/// Pruned descriptor the renderer needs to label a cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricDescriptor {
    pub field: String,
    pub label: String,
    pub description: String,
    pub units: String,
    pub format: String,
}

/// Read-only id -> definition map.
#[derive(Debug, Clone, Default)]
pub struct MetricRegistry {
    defs: HashMap<String, MetricDef>,
}

impl MetricRegistry {
    pub fn new(defs: impl IntoIterator<Item = (String, MetricDef)>) -> Self {
        Self {
            defs: defs.into_iter().collect(),
        }
    }

    pub fn lookup(&self, id: &str) -> Option<&MetricDef> {
        self.defs.get(id)
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Stock metric set for the index and node listings.
    pub fn builtin() -> Self {
        let def = |field: &str,
                   metric_agg: MetricAgg,
                   derivative: bool,
                   label: &str,
                   description: &str,
                   units: &str,
                   format: &str| MetricDef {
            field: field.into(),
            metric_agg,
            derivative,
            label: label.into(),
            description: description.into(),
            units: units.into(),
            format: format.into(),
        };

        Self::new([
            (
                "index_search_request_rate".to_string(),
                def(
                    "index_stats.total.search.query_total",
                    MetricAgg::Max,
                    true,
                    "Search Rate",
                    "Number of search requests per second, on all shards of the index.",
                    "/s",
                    "0,0.[00]",
                ),
            ),
            (
                "index_request_rate_primary".to_string(),
                def(
                    "index_stats.primaries.indexing.index_total",
                    MetricAgg::Max,
                    true,
                    "Indexing Rate",
                    "Number of documents indexed per second, on primary shards only.",
                    "/s",
                    "0,0.[00]",
                ),
            ),
            (
                "index_size".to_string(),
                def(
                    "index_stats.total.store.size_in_bytes",
                    MetricAgg::Avg,
                    false,
                    "Data",
                    "Size of the index on disk, for primary and replica shards.",
                    "B",
                    "0,0.0 b",
                ),
            ),
            (
                "index_document_count".to_string(),
                def(
                    "index_stats.primaries.docs.count",
                    MetricAgg::Avg,
                    false,
                    "Document Count",
                    "Total number of documents, on primary shards only.",
                    "",
                    "0,0.[0]a",
                ),
            ),
            (
                "node_cpu_utilization".to_string(),
                def(
                    "node_stats.process.cpu.percent",
                    MetricAgg::Avg,
                    false,
                    "CPU Utilization",
                    "Percentage of CPU usage for the process.",
                    "%",
                    "0,0.[00]",
                ),
            ),
            (
                "node_load_average".to_string(),
                def(
                    "node_stats.os.cpu.load_average.1m",
                    MetricAgg::Avg,
                    false,
                    "Load Average",
                    "Load average over the last minute.",
                    "",
                    "0,0.[00]",
                ),
            ),
            (
                "node_jvm_mem_percent".to_string(),
                def(
                    "node_stats.jvm.mem.heap_used_percent",
                    MetricAgg::Max,
                    false,
                    "JVM Heap",
                    "Heap memory used by the JVM, as a percentage of the configured maximum.",
                    "%",
                    "0,0.[00]",
                ),
            ),
            (
                "node_free_space".to_string(),
                def(
                    "node_stats.fs.total.available_in_bytes",
                    MetricAgg::Max,
                    false,
                    "Disk Free Space",
                    "Free disk space available on the node.",
                    "B",
                    "0,0.0 b",
                ),
            ),
        ])
    }
}
