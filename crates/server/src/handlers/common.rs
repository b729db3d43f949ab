//! Health and statistics.

use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use roost_gallery::GalleryStats;
use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /v1/health
///
/// Does not probe upstream sources; a slow image host must not fail liveness
/// checks.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /v1/stats - Cache sizes and hash cache hit counts.
pub async fn get_stats(State(state): State<AppState>) -> Json<GalleryStats> {
    Json(state.gallery.stats().await)
}
