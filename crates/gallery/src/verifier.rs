//! Batch claim verification.

use crate::error::VerificationError;
use crate::metrics;
use crate::verification_cache::{DigestLookup, VerificationCache};
use dashmap::DashMap;
use roost_core::{Digest, HashCache, VerificationResult};
use roost_sources::{ClaimRegistry, SourceError};
use std::sync::Arc;

/// Queries the claim registry, memoized by the exact (ordered) batch.
///
/// Every registry answer is also recorded per digest in a
/// [`VerificationCache`].
pub struct ClaimVerifier {
    registry: Arc<dyn ClaimRegistry>,
    hasher: Arc<HashCache>,
    batches: DashMap<Digest, Arc<VerificationResult>>,
    digests: VerificationCache,
}

impl ClaimVerifier {
    pub fn new(registry: Arc<dyn ClaimRegistry>, hasher: Arc<HashCache>) -> Self {
        Self {
            registry,
            hasher,
            batches: DashMap::new(),
            digests: VerificationCache::new(),
        }
    }

    /// Cache key of a batch: the digest of its JSON array form.
    ///
    /// Order-sensitive: `[a, b]` and `[b, a]` have different keys.
    pub fn batch_key(&self, hashes: &[Digest]) -> roost_core::Result<Digest> {
        let serialized = serde_json::to_string(hashes)
            .map_err(|e| roost_core::Error::Serialization(e.to_string()))?;
        Ok(self.hasher.digest_str(&serialized))
    }

    /// Verify a batch of digests with at most one registry request.
    ///
    /// An empty batch yields an empty result without touching the registry.
    pub async fn verify_batch(
        &self,
        hashes: &[Digest],
    ) -> Result<Arc<VerificationResult>, VerificationError> {
        if hashes.is_empty() {
            return Ok(Arc::new(VerificationResult::default()));
        }

        let key = self.batch_key(hashes).map_err(|e| VerificationError {
            batch_len: hashes.len(),
            source: SourceError::Encode(e.to_string()),
        })?;
        let cached = self.batches.get(&key).map(|entry| entry.value().clone());
        if let Some(result) = cached {
            metrics::VERIFY_BATCH_CACHE_HITS.inc();
            tracing::debug!(batch_key = %key, batch_len = hashes.len(), "Verification batch cache hit");
            return Ok(result);
        }

        metrics::VERIFY_REQUESTS.inc();
        let result = match self.registry.exists_multi(hashes).await {
            Ok(result) => result,
            Err(source) => {
                metrics::VERIFY_FAILURES.inc();
                tracing::error!(
                    batch_key = %key,
                    batch_len = hashes.len(),
                    error = %source,
                    "Claim registry request failed"
                );
                return Err(VerificationError {
                    batch_len: hashes.len(),
                    source,
                });
            }
        };

        self.digests.insert_all(
            result
                .result
                .iter()
                .map(|(digest, claim)| (*digest, claim.clone())),
        );

        let result = Arc::new(result);
        self.batches.insert(key, result.clone());
        tracing::debug!(
            batch_key = %key,
            batch_len = hashes.len(),
            answered = result.len(),
            "Verified batch"
        );
        Ok(result)
    }

    /// Claim status already known per digest, without a registry request.
    pub fn cached_claims(&self, hashes: &[Digest]) -> DigestLookup {
        self.digests.lookup(hashes)
    }

    pub fn digest_cache(&self) -> &VerificationCache {
        &self.digests
    }

    /// Number of cached batches.
    pub fn batch_count(&self) -> usize {
        self.batches.len()
    }

    /// Clear both the batch cache and the per-digest cache.
    pub fn clear(&self) {
        self.batches.clear();
        self.digests.clear();
    }
}
