// Query DSL for the upstream search request: bool filter with the bounded
// time range that the listing window is later checked against.

use serde_json::{Value, json};

/// Bounded time-range query. `filters` are appended to the bool filter clause
/// verbatim, after the range and the optional cluster term.
#[derive(Debug, Clone, Default)]
pub struct TimeRangeQuery {
    /// Inclusive lower bound, epoch millis.
    pub start_ms: i64,
    /// Inclusive upper bound, epoch millis.
    pub end_ms: i64,
    pub cluster_uuid: Option<String>,
    pub filters: Vec<Value>,
}

impl TimeRangeQuery {
    pub fn to_dsl(&self) -> Value {
        let mut filter = vec![json!({
            "range": {
                "timestamp": {
                    "format": "epoch_millis",
                    "gte": self.start_ms,
                    "lte": self.end_ms,
                }
            }
        })];
        if let Some(uuid) = &self.cluster_uuid {
            filter.push(json!({ "term": { "cluster_uuid": uuid } }));
        }
        filter.extend(self.filters.iter().cloned());
        json!({ "bool": { "filter": filter } })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_clause_uses_epoch_millis_bounds() {
        let query = TimeRangeQuery {
            start_ms: 1_000,
            end_ms: 2_000,
            ..Default::default()
        };
        let dsl = query.to_dsl();
        let range = &dsl["bool"]["filter"][0]["range"]["timestamp"];
        assert_eq!(range["gte"], 1_000);
        assert_eq!(range["lte"], 2_000);
        assert_eq!(range["format"], "epoch_millis");
    }

    #[test]
    fn cluster_uuid_adds_term_clause() {
        let query = TimeRangeQuery {
            start_ms: 0,
            end_ms: 1,
            cluster_uuid: Some("abc123".into()),
            ..Default::default()
        };
        let dsl = query.to_dsl();
        assert_eq!(dsl["bool"]["filter"][1]["term"]["cluster_uuid"], "abc123");
    }

    #[test]
    fn extra_filters_appended_after_builtins() {
        let query = TimeRangeQuery {
            start_ms: 0,
            end_ms: 1,
            cluster_uuid: Some("abc123".into()),
            filters: vec![json!({ "term": { "type": "index_stats" } })],
        };
        let dsl = query.to_dsl();
        let filter = dsl["bool"]["filter"].as_array().unwrap();
        assert_eq!(filter.len(), 3);
        assert_eq!(filter[2]["term"]["type"], "index_stats");
    }
}
