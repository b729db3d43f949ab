//! In-memory upstream sources.

use async_trait::async_trait;
use bytes::Bytes;
use roost_core::{ContentUri, Digest, ItemId, ItemTraits, VerificationResult};
use roost_sources::{ClaimRegistry, ImageSource, SourceError, SourceResult, TraitsSource};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

#[allow(dead_code)]
pub fn image_bytes(id: u32) -> Bytes {
    Bytes::from(format!("png-{id}"))
}

#[allow(dead_code)]
pub fn content_uri(id: u32) -> ContentUri {
    ContentUri::encode(&image_bytes(id))
}

#[allow(dead_code)]
pub fn content_hash(id: u32) -> Digest {
    Digest::compute(content_uri(id).as_bytes())
}

#[allow(dead_code)]
#[derive(Default)]
pub struct FakeImages {
    pub failing: Mutex<HashSet<u32>>,
    pub fetches: AtomicUsize,
}

#[async_trait]
impl ImageSource for FakeImages {
    fn image_url(&self, id: ItemId) -> String {
        format!("fake://png/{id}")
    }

    async fn fetch(&self, url: &str) -> SourceResult<Bytes> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let id: u32 = url
            .rsplit('/')
            .next()
            .and_then(|n| n.parse().ok())
            .expect("fake image url");
        if self.failing.lock().unwrap().contains(&id) {
            return Err(SourceError::Status {
                url: url.to_string(),
                status: 404,
            });
        }
        Ok(image_bytes(id))
    }
}

#[allow(dead_code)]
#[derive(Default)]
pub struct FakeRegistry {
    pub claims: Mutex<HashMap<Digest, Option<String>>>,
    pub failing: AtomicBool,
    pub calls: AtomicUsize,
}

#[async_trait]
impl ClaimRegistry for FakeRegistry {
    async fn exists_multi(&self, shas: &[Digest]) -> SourceResult<VerificationResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(SourceError::Status {
                url: "fake://registry".to_string(),
                status: 503,
            });
        }
        let claims = self.claims.lock().unwrap();
        Ok(VerificationResult::new(
            shas.iter()
                .filter_map(|sha| claims.get(sha).map(|claim| (*sha, claim.clone())))
                .collect(),
        ))
    }
}

#[allow(dead_code)]
#[derive(Default)]
pub struct FakeTraits {
    pub traits: Vec<ItemTraits>,
    pub failing: AtomicBool,
}

#[async_trait]
impl TraitsSource for FakeTraits {
    async fn fetch_traits(&self) -> SourceResult<Vec<ItemTraits>> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(SourceError::Status {
                url: "fake://traits.json".to_string(),
                status: 500,
            });
        }
        Ok(self.traits.clone())
    }
}
