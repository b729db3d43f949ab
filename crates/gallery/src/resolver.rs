//! Image resolution with a per-id item cache.

use crate::error::FetchError;
use crate::metrics;
use dashmap::DashMap;
use roost_core::{ContentUri, HashCache, Item, ItemId};
use roost_sources::ImageSource;
use std::sync::Arc;

/// Fetches, encodes and hashes item images, memoized by item id.
///
/// Only successful resolutions are stored, so a failed id is retried on the
/// next request.
pub struct ImageResolver {
    source: Arc<dyn ImageSource>,
    hasher: Arc<HashCache>,
    items: DashMap<ItemId, Arc<Item>>,
}

impl ImageResolver {
    pub fn new(source: Arc<dyn ImageSource>, hasher: Arc<HashCache>) -> Self {
        Self {
            source,
            hasher,
            items: DashMap::new(),
        }
    }

    /// Resolve an item, fetching its image at most once per process.
    pub async fn resolve(&self, id: ItemId) -> Result<Arc<Item>, FetchError> {
        let cached = self.cached(id);
        if let Some(item) = cached {
            metrics::IMAGE_CACHE_HITS.inc();
            tracing::trace!(id = %id, "Image cache hit");
            return Ok(item);
        }

        let url = self.source.image_url(id);
        metrics::IMAGE_FETCHES.inc();
        let bytes = match self.source.fetch(&url).await {
            Ok(bytes) => bytes,
            Err(source) => {
                metrics::IMAGE_FETCH_FAILURES.inc();
                return Err(FetchError { id, url, source });
            }
        };

        let content_uri = ContentUri::encode(&bytes);
        let content_hash = self.hasher.digest(content_uri.as_bytes());
        let item = Arc::new(Item {
            id,
            url,
            content_uri,
            content_hash,
        });

        // A concurrent resolution of the same id may have landed first; keep
        // whichever was stored so every caller sees one Item per id.
        let stored = self.items.entry(id).or_insert(item).value().clone();
        tracing::debug!(id = %id, content_hash = %stored.content_hash, "Resolved item");
        Ok(stored)
    }

    /// The cached item for `id`, without any network access.
    pub fn cached(&self, id: ItemId) -> Option<Arc<Item>> {
        self.items.get(&id).map(|entry| entry.value().clone())
    }

    /// Number of resolved items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&self) {
        self.items.clear();
    }
}
