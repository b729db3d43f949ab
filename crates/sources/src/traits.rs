//! Source trait definitions.

use crate::error::SourceResult;
use async_trait::async_trait;
use bytes::Bytes;
use roost_core::{Digest, ItemId, ItemTraits, VerificationResult};

/// Origin of the raw item images.
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Canonical image location for an item. Deterministic in `id`.
    fn image_url(&self, id: ItemId) -> String;

    /// Fetch the full image body. Non-success statuses are errors.
    async fn fetch(&self, url: &str) -> SourceResult<Bytes>;
}

/// External registry recording which content hashes have been claimed.
#[async_trait]
pub trait ClaimRegistry: Send + Sync {
    /// Query a batch of digests in one request.
    ///
    /// Callers never pass an empty batch.
    async fn exists_multi(&self, shas: &[Digest]) -> SourceResult<VerificationResult>;
}

/// Source of the per-item traits document.
#[async_trait]
pub trait TraitsSource: Send + Sync {
    /// Fetch the whole traits array, indexed positionally by item id.
    async fn fetch_traits(&self) -> SourceResult<Vec<ItemTraits>>;
}
