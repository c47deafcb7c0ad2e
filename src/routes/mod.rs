// HTTP routes

mod http;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::config::AppConfig;
use crate::models::MetricRegistry;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) registry: Arc<MetricRegistry>,
    pub(crate) config: AppConfig,
}

pub fn app(registry: Arc<MetricRegistry>, config: AppConfig) -> Router {
    let state = AppState { registry, config };
    Router::new()
        .route("/", get(|| async { "clustermon listing service" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/listing/indices", post(http::listing_indices)) // POST index rows
        .route("/api/listing/nodes", post(http::listing_nodes)) // POST node rows
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
