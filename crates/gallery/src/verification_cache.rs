//! Per-digest verification cache.
//!
//! Independent of the batch cache in [`ClaimVerifier`](crate::verifier::ClaimVerifier):
//! results are stored per digest so that differently shaped batches sharing
//! members can reuse what is already known.

use dashmap::DashMap;
use roost_core::Digest;
use serde::Serialize;
use std::collections::HashMap;

/// Result of looking a set of digests up in the cache.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DigestLookup {
    /// Known digests and their claim id (`None` = known to be unclaimed).
    pub cached: HashMap<Digest, Option<String>>,
    /// Digests with no cached result, in query order.
    pub uncached: Vec<Digest>,
}

#[derive(Debug, Default)]
pub struct VerificationCache {
    entries: DashMap<Digest, Option<String>>,
}

impl VerificationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split `digests` into known results and unknown digests.
    pub fn lookup(&self, digests: &[Digest]) -> DigestLookup {
        let mut lookup = DigestLookup::default();
        for digest in digests {
            match self.entries.get(digest) {
                Some(entry) => {
                    lookup.cached.insert(*digest, entry.value().clone());
                }
                None => lookup.uncached.push(*digest),
            }
        }
        lookup
    }

    /// Record newly learned results. Later writes win.
    pub fn insert_all<I>(&self, results: I)
    where
        I: IntoIterator<Item = (Digest, Option<String>)>,
    {
        for (digest, claim) in results {
            self.entries.insert(digest, claim);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}
