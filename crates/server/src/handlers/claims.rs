//! Claim cache lookups.

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use roost_core::{COLLECTION_SIZE, VerifyRequest};
use roost_gallery::DigestLookup;

/// POST /v1/claims/lookup
///
/// Answers from the per-digest cache only; never calls the registry.
pub async fn lookup_claims(
    State(state): State<AppState>,
    Json(request): Json<VerifyRequest>,
) -> ApiResult<Json<DigestLookup>> {
    if request.shas.len() > COLLECTION_SIZE as usize {
        return Err(ApiError::BadRequest(format!(
            "at most {COLLECTION_SIZE} digests per lookup"
        )));
    }
    Ok(Json(state.gallery.cached_claims(&request.shas)))
}
