// Handlers: version, and the two listing routes (indices, nodes).
// Bad window parameters are the only 400; everything else degrades to
// absent fields inside the mapper.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use super::AppState;
use crate::listing::{ListingOptions, ListingWindow, calculator::ListingKind, map_listing};
use crate::models::ListingItem;
use crate::version::{NAME, VERSION};

/// GET /version — returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// Body for both listing routes: terms-aggregation items plus the window the
/// date histogram was built with.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ListingPayload {
    items: Vec<ListingItem>,
    metrics: Vec<String>,
    /// Inclusive lower bound, epoch millis.
    min: i64,
    /// Inclusive upper bound, epoch millis.
    max: i64,
    /// Histogram bucket size in seconds.
    bucket_size: u64,
}

pub(super) async fn listing_indices(
    State(state): State<AppState>,
    Json(payload): Json<ListingPayload>,
) -> Response {
    listing(ListingKind::Indices, &state, payload)
}

pub(super) async fn listing_nodes(
    State(state): State<AppState>,
    Json(payload): Json<ListingPayload>,
) -> Response {
    listing(ListingKind::Nodes, &state, payload)
}

fn listing(kind: ListingKind, state: &AppState, payload: ListingPayload) -> Response {
    let settings = &state.config.listing;
    if payload.items.len() > settings.max_items {
        let message = format!(
            "too many items: {} exceeds listing.max_items = {}",
            payload.items.len(),
            settings.max_items
        );
        tracing::warn!(items = payload.items.len(), "listing request rejected");
        return bad_request(message);
    }

    let window = ListingWindow {
        min_ms: payload.min,
        max_ms: payload.max,
        bucket_size_secs: payload.bucket_size,
    };
    let options = ListingOptions {
        ignore_early: settings.ignore_early_buckets,
        include_trailing_partial: settings.include_trailing_partial,
    };

    match map_listing(
        kind,
        &payload.items,
        &payload.metrics,
        window,
        &state.registry,
        options,
    ) {
        Ok(rows) => Json(rows).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "listing request rejected");
            bad_request(e.to_string())
        }
    }
}

fn bad_request(message: String) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "error": message })),
    )
        .into_response()
}
