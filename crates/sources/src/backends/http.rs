//! reqwest-backed HTTP sources.

use crate::error::{SourceError, SourceResult};
use crate::traits::{ClaimRegistry, ImageSource, TraitsSource};
use async_trait::async_trait;
use bytes::Bytes;
use roost_core::config::SourcesConfig;
use roost_core::{Digest, ItemId, ItemTraits, VerificationResult, VerifyRequest};

/// Build the shared HTTP client from configuration.
pub fn build_client(config: &SourcesConfig) -> SourceResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(config.request_timeout())
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(|e| SourceError::Config(format!("failed to build HTTP client: {e}")))
}

/// Send a request and return the body of a successful response.
async fn send_for_body(url: &str, req: reqwest::RequestBuilder) -> SourceResult<Bytes> {
    let response = req.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    Ok(response.bytes().await?)
}

/// Images served as `{base_url}/{id}.png`.
#[derive(Clone)]
pub struct HttpImageSource {
    http: reqwest::Client,
    base_url: String,
}

impl HttpImageSource {
    pub fn new(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ImageSource for HttpImageSource {
    fn image_url(&self, id: ItemId) -> String {
        format!("{}/{}.png", self.base_url, id)
    }

    async fn fetch(&self, url: &str) -> SourceResult<Bytes> {
        let body = send_for_body(url, self.http.get(url)).await?;
        tracing::debug!(url = %url, bytes = body.len(), "Fetched image");
        Ok(body)
    }
}

/// Claim registry answering `POST {endpoint}` with `{ shas }`.
#[derive(Clone)]
pub struct HttpClaimRegistry {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpClaimRegistry {
    pub fn new(http: reqwest::Client, endpoint: &str) -> Self {
        Self {
            http,
            endpoint: endpoint.to_string(),
        }
    }
}

#[async_trait]
impl ClaimRegistry for HttpClaimRegistry {
    async fn exists_multi(&self, shas: &[Digest]) -> SourceResult<VerificationResult> {
        let request = VerifyRequest {
            shas: shas.to_vec(),
        };
        let body = send_for_body(&self.endpoint, self.http.post(&self.endpoint).json(&request))
            .await?;
        VerificationResult::from_json(&body).map_err(|e| SourceError::Decode(e.to_string()))
    }
}

/// Traits document fetched with a single GET.
#[derive(Clone)]
pub struct HttpTraitsSource {
    http: reqwest::Client,
    url: String,
}

impl HttpTraitsSource {
    pub fn new(http: reqwest::Client, url: &str) -> Self {
        Self {
            http,
            url: url.to_string(),
        }
    }
}

#[async_trait]
impl TraitsSource for HttpTraitsSource {
    async fn fetch_traits(&self) -> SourceResult<Vec<ItemTraits>> {
        let body = send_for_body(&self.url, self.http.get(&self.url)).await?;
        serde_json::from_slice(&body).map_err(|e| SourceError::Decode(e.to_string()))
    }
}
