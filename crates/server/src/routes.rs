//! Route configuration.

use crate::handlers;
use crate::metrics::metrics_handler;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/v1/health", get(handlers::health_check))
        .route("/v1/stats", get(handlers::get_stats))
        .route("/v1/pages/{page_index}", get(handlers::get_page))
        .route("/v1/items/{id}", get(handlers::get_item))
        .route("/v1/items/{id}/traits", get(handlers::get_item_traits))
        .route("/v1/items/{id}/calldata", get(handlers::get_item_calldata))
        .route("/v1/claims/lookup", post(handlers::lookup_claims));

    // Unauthenticated; restrict at the network edge.
    if state.config.server.metrics_enabled {
        router = router.route("/metrics", get(metrics_handler));
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}
