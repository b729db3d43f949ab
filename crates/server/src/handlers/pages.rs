//! Page queries.

use crate::error::ApiResult;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use roost_core::Page;

/// GET /v1/pages/{page_index}
///
/// Pages past the end of the collection are empty, not an error.
pub async fn get_page(
    State(state): State<AppState>,
    Path(page_index): Path<u32>,
) -> ApiResult<Json<Page>> {
    let page = state.gallery.page(page_index).await?;
    Ok(Json(page))
}
