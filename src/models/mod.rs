// Domain models: aggregation response shapes in, listing rows out.

mod bucket;
mod listing;
mod metric;

pub use bucket::{Bucket, DerivativeValue, ListingItem, MetricSeries, MetricValue};
pub use listing::{ListingRow, MetricStats, MetricSummary};
pub use metric::{MetricAgg, MetricDef, MetricDescriptor, MetricRegistry};
