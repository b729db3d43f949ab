//! Cached traits document.

use crate::error::TraitsError;
use crate::metrics;
use roost_core::{Attribute, ItemId, ItemTraits};
use roost_sources::TraitsSource;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Loads the traits document once and serves per-item attributes from it.
///
/// A failed load is not remembered; the next call fetches again.
pub struct TraitsCatalog {
    source: Arc<dyn TraitsSource>,
    traits: Mutex<Option<Arc<Vec<ItemTraits>>>>,
}

impl TraitsCatalog {
    pub fn new(source: Arc<dyn TraitsSource>) -> Self {
        Self {
            source,
            traits: Mutex::new(None),
        }
    }

    /// The full traits document, fetching it on first use.
    pub async fn traits(&self) -> Result<Arc<Vec<ItemTraits>>, TraitsError> {
        // Held across the fetch so concurrent first callers share one request.
        let mut slot = self.traits.lock().await;
        if let Some(traits) = slot.as_ref() {
            return Ok(traits.clone());
        }

        metrics::TRAITS_FETCHES.inc();
        let traits = Arc::new(self.source.fetch_traits().await?);
        tracing::info!(entries = traits.len(), "Loaded traits document");
        *slot = Some(traits.clone());
        Ok(traits)
    }

    /// Attributes of one item; empty when the document has no entry for it.
    pub async fn attributes(&self, id: ItemId) -> Result<Vec<Attribute>, TraitsError> {
        let traits = self.traits().await?;
        Ok(traits
            .get(id.index())
            .map(ItemTraits::attributes)
            .unwrap_or_default())
    }

    pub async fn is_loaded(&self) -> bool {
        self.traits.lock().await.is_some()
    }

    pub async fn clear(&self) {
        *self.traits.lock().await = None;
    }
}
