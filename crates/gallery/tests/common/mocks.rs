use async_trait::async_trait;
use bytes::Bytes;
use roost_core::{ContentUri, Digest, ItemId, ItemTraits, VerificationResult};
use roost_sources::{ClaimRegistry, ImageSource, SourceError, SourceResult, TraitsSource};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

const IMAGE_URL_PREFIX: &str = "mock://png/";

/// Deterministic fake PNG body for an item.
#[allow(dead_code)]
pub fn image_bytes(id: u32) -> Bytes {
    let mut data = b"\x89PNG\r\n\x1a\n".to_vec();
    data.extend_from_slice(format!("moonbird-{id}").as_bytes());
    Bytes::from(data)
}

/// Content hash the pipeline must produce for an item.
#[allow(dead_code)]
pub fn expected_hash(id: u32) -> Digest {
    Digest::compute(ContentUri::encode(&image_bytes(id)).as_bytes())
}

/// Image source that counts fetches and can be told to fail specific ids.
#[allow(dead_code)]
pub struct CountingImageSource {
    fetches: AtomicUsize,
    failing: Mutex<HashSet<u32>>,
    jitter: bool,
}

#[allow(dead_code)]
impl CountingImageSource {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            fetches: AtomicUsize::new(0),
            failing: Mutex::new(HashSet::new()),
            jitter: false,
        })
    }

    /// Responses for higher ids within a page return first.
    pub fn with_jitter() -> Arc<Self> {
        Arc::new(Self {
            fetches: AtomicUsize::new(0),
            failing: Mutex::new(HashSet::new()),
            jitter: true,
        })
    }

    pub fn fail(&self, id: u32) {
        self.failing.lock().unwrap().insert(id);
    }

    pub fn recover(&self, id: u32) {
        self.failing.lock().unwrap().remove(&id);
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageSource for CountingImageSource {
    fn image_url(&self, id: ItemId) -> String {
        format!("{IMAGE_URL_PREFIX}{id}.png")
    }

    async fn fetch(&self, url: &str) -> SourceResult<Bytes> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let id: u32 = url
            .strip_prefix(IMAGE_URL_PREFIX)
            .and_then(|rest| rest.strip_suffix(".png"))
            .and_then(|n| n.parse().ok())
            .expect("mock image url");

        if self.jitter {
            let delay = u64::from(99 - id % 100) / 10;
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        if self.failing.lock().unwrap().contains(&id) {
            return Err(SourceError::Status {
                url: url.to_string(),
                status: 404,
            });
        }
        Ok(image_bytes(id))
    }
}

/// Claim registry answering from a fixed table.
///
/// Digests present in the table are answered with their value (claim id or
/// null); digests not in the table are left out of the response entirely.
#[allow(dead_code)]
pub struct ScriptedRegistry {
    claims: Mutex<HashMap<Digest, Option<String>>>,
    calls: Mutex<Vec<Vec<Digest>>>,
    failing: AtomicBool,
}

#[allow(dead_code)]
impl ScriptedRegistry {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            claims: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            failing: AtomicBool::new(false),
        })
    }

    pub fn answer(&self, digest: Digest, claim: Option<&str>) {
        self.claims
            .lock()
            .unwrap()
            .insert(digest, claim.map(str::to_string));
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<Vec<Digest>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClaimRegistry for ScriptedRegistry {
    async fn exists_multi(&self, shas: &[Digest]) -> SourceResult<VerificationResult> {
        self.calls.lock().unwrap().push(shas.to_vec());
        if self.failing.load(Ordering::SeqCst) {
            return Err(SourceError::Status {
                url: "mock://registry".to_string(),
                status: 503,
            });
        }

        let claims = self.claims.lock().unwrap();
        let result = shas
            .iter()
            .filter_map(|sha| claims.get(sha).map(|claim| (*sha, claim.clone())))
            .collect();
        Ok(VerificationResult::new(result))
    }
}

/// Traits source serving a fixed document.
#[allow(dead_code)]
pub struct StaticTraits {
    traits: Vec<ItemTraits>,
    fetches: AtomicUsize,
    failing: AtomicBool,
}

#[allow(dead_code)]
impl StaticTraits {
    pub fn new(traits: Vec<ItemTraits>) -> Arc<Self> {
        Arc::new(Self {
            traits,
            fetches: AtomicUsize::new(0),
            failing: AtomicBool::new(false),
        })
    }

    pub fn empty() -> Arc<Self> {
        Self::new(Vec::new())
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TraitsSource for StaticTraits {
    async fn fetch_traits(&self) -> SourceResult<Vec<ItemTraits>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(SourceError::Status {
                url: "mock://traits.json".to_string(),
                status: 500,
            });
        }
        Ok(self.traits.clone())
    }
}
