//! Single-item lookups.

use crate::error::ApiResult;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use roost_core::{Attribute, Digest, Item, ItemId};
use serde::Serialize;

/// Calldata for minting an item: the hex form of its content URI.
#[derive(Debug, Serialize)]
pub struct CalldataResponse {
    pub id: ItemId,
    pub content_hash: Digest,
    pub calldata: String,
}

/// GET /v1/items/{id}
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> ApiResult<Json<Item>> {
    let id = ItemId::new(id)?;
    let item = state.gallery.item(id).await?;
    Ok(Json(Item::clone(&item)))
}

/// GET /v1/items/{id}/traits
pub async fn get_item_traits(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> ApiResult<Json<Vec<Attribute>>> {
    let id = ItemId::new(id)?;
    Ok(Json(state.gallery.attributes(id).await?))
}

/// GET /v1/items/{id}/calldata
pub async fn get_item_calldata(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> ApiResult<Json<CalldataResponse>> {
    let id = ItemId::new(id)?;
    let item = state.gallery.item(id).await?;
    Ok(Json(CalldataResponse {
        id,
        content_hash: item.content_hash,
        calldata: item.content_uri.calldata_hex(),
    }))
}
