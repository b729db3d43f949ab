//! Server test utilities.

use super::fakes::{FakeImages, FakeRegistry, FakeTraits};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use roost_core::ItemTraits;
use roost_core::config::AppConfig;
use roost_gallery::Gallery;
use roost_server::{AppState, create_router};
use roost_sources::Sources;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// A router wired to in-memory sources.
/// Note: #[allow(dead_code)] because each test file compiles common/ separately.
#[allow(dead_code)]
pub struct TestServer {
    pub router: axum::Router,
    pub state: AppState,
    pub images: Arc<FakeImages>,
    pub registry: Arc<FakeRegistry>,
    pub traits: Arc<FakeTraits>,
}

#[allow(dead_code)]
impl TestServer {
    pub fn new() -> Self {
        Self::with_traits(vec![ItemTraits {
            specie: "Crescent".to_string(),
            beak: "Small".to_string(),
            ..Default::default()
        }])
    }

    pub fn with_traits(traits: Vec<ItemTraits>) -> Self {
        Self::build(AppConfig::default(), traits)
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self::build(config, Vec::new())
    }

    fn build(config: AppConfig, traits: Vec<ItemTraits>) -> Self {
        let images = Arc::new(FakeImages::default());
        let registry = Arc::new(FakeRegistry::default());
        let traits = Arc::new(FakeTraits {
            traits,
            ..Default::default()
        });

        let gallery = Gallery::new(Sources {
            images: images.clone(),
            registry: registry.clone(),
            traits: traits.clone(),
        });
        let state = AppState::new(config, gallery);
        let router = create_router(state.clone());

        Self {
            router,
            state,
            images,
            registry,
            traits,
        }
    }

    /// Send a request and decode the JSON body (`Null` when empty or not JSON).
    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let (status, bytes) = self.request_raw(method, uri, body).await;
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    pub async fn request_raw(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Vec<u8>) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(v) => {
                builder = builder.header("Content-Type", "application/json");
                Body::from(serde_json::to_vec(&v).unwrap())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request("GET", uri, None).await
    }
}
