//! Memoizing SHA-256 hasher.

use crate::digest::Digest;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide digest memo keyed by the exact input bytes.
///
/// Entries are never evicted. Two tasks racing on the same uncached input may
/// both compute the digest; the second insert overwrites the first with an
/// identical value.
#[derive(Debug, Default)]
pub struct HashCache {
    entries: DashMap<Box<[u8]>, Digest>,
    hits: AtomicU64,
    misses: AtomicU64,
}

/// Snapshot of hasher counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HashCacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

impl HashCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Digest arbitrary bytes, reusing a previous result for identical input.
    pub fn digest(&self, input: &[u8]) -> Digest {
        if let Some(found) = self.entries.get(input) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return *found;
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let digest = Digest::compute(input);
        self.entries.insert(input.into(), digest);
        digest
    }

    /// Digest the UTF-8 bytes of a string.
    pub fn digest_str(&self, input: &str) -> Digest {
        self.digest(input.as_bytes())
    }

    /// Number of memoized inputs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> HashCacheStats {
        HashCacheStats {
            entries: self.entries.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    /// Drop every memoized digest and reset counters.
    pub fn clear(&self) {
        self.entries.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}
