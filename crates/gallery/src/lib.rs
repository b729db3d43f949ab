//! Image resolution and claim verification pipeline for roost.
//!
//! This crate provides:
//! - [`ImageResolver`]: fetch, encode and hash item images, memoized by id
//! - [`ClaimVerifier`]: batch claim lookups, memoized by exact batch and per digest
//! - [`PageAssembler`]: fixed-size page windows with merged claim status
//! - [`TraitsCatalog`]: cached per-item trait attributes
//! - [`Gallery`]: one handle owning all of the above and their shared caches

pub mod assembler;
pub mod error;
pub mod metrics;
pub mod resolver;
pub mod traits_catalog;
pub mod verification_cache;
pub mod verifier;

pub use assembler::PageAssembler;
pub use error::{FetchError, PageError, TraitsError, VerificationError};
pub use resolver::ImageResolver;
pub use traits_catalog::TraitsCatalog;
pub use verification_cache::{DigestLookup, VerificationCache};
pub use verifier::ClaimVerifier;

use roost_core::{Attribute, Digest, HashCache, Item, ItemId, Page};
use roost_sources::Sources;
use serde::Serialize;
use std::sync::Arc;

/// Cache sizes, for the stats endpoint and tests.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GalleryStats {
    pub hashes: usize,
    pub hash_hits: u64,
    pub hash_misses: u64,
    pub items: usize,
    pub verification_batches: usize,
    pub verified_digests: usize,
    pub traits_loaded: bool,
}

/// The pipeline handle. Created once at startup and shared by all requests.
pub struct Gallery {
    hasher: Arc<HashCache>,
    resolver: Arc<ImageResolver>,
    verifier: Arc<ClaimVerifier>,
    assembler: PageAssembler,
    traits: TraitsCatalog,
}

impl Gallery {
    pub fn new(sources: Sources) -> Self {
        let hasher = Arc::new(HashCache::new());
        let resolver = Arc::new(ImageResolver::new(sources.images, hasher.clone()));
        let verifier = Arc::new(ClaimVerifier::new(sources.registry, hasher.clone()));
        let assembler = PageAssembler::new(resolver.clone(), verifier.clone());
        let traits = TraitsCatalog::new(sources.traits);

        Self {
            hasher,
            resolver,
            verifier,
            assembler,
            traits,
        }
    }

    /// Assemble page `page_index`.
    pub async fn page(&self, page_index: u32) -> Result<Page, PageError> {
        self.assembler.get_page(page_index).await
    }

    /// Resolve a single item without claim status.
    pub async fn item(&self, id: ItemId) -> Result<Arc<Item>, FetchError> {
        self.resolver.resolve(id).await
    }

    pub async fn attributes(&self, id: ItemId) -> Result<Vec<Attribute>, TraitsError> {
        self.traits.attributes(id).await
    }

    /// Claim status already known locally for each digest.
    pub fn cached_claims(&self, hashes: &[Digest]) -> DigestLookup {
        self.verifier.cached_claims(hashes)
    }

    pub fn hasher(&self) -> &HashCache {
        &self.hasher
    }

    pub fn resolver(&self) -> &ImageResolver {
        &self.resolver
    }

    pub fn verifier(&self) -> &ClaimVerifier {
        &self.verifier
    }

    pub async fn stats(&self) -> GalleryStats {
        let hashes = self.hasher.stats();
        GalleryStats {
            hashes: hashes.entries,
            hash_hits: hashes.hits,
            hash_misses: hashes.misses,
            items: self.resolver.len(),
            verification_batches: self.verifier.batch_count(),
            verified_digests: self.verifier.digest_cache().len(),
            traits_loaded: self.traits.is_loaded().await,
        }
    }

    /// Drop every cached value. Intended for tests.
    pub async fn clear_caches(&self) {
        self.hasher.clear();
        self.resolver.clear();
        self.verifier.clear();
        self.traits.clear().await;
    }
}
