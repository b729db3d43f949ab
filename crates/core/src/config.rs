//! Configuration types shared across crates.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Top-level application configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Upstream image, registry and traits endpoints.
    #[serde(default)]
    pub sources: SourcesConfig,
}

impl AppConfig {
    /// Configuration pointing every source at `base_url`, for tests against a mock server.
    pub fn for_testing(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/');
        Self {
            server: ServerConfig::default(),
            sources: SourcesConfig {
                image_base_url: format!("{base_url}/png"),
                verify_endpoint: format!("{base_url}/exists_multi"),
                traits_url: format!("{base_url}/traits.json"),
                request_timeout_secs: 5,
                user_agent: default_user_agent(),
            },
        }
    }
}

/// Server configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Enable the /metrics endpoint for Prometheus scraping (default: true).
    #[serde(default = "default_metrics_enabled")]
    pub metrics_enabled: bool,
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_metrics_enabled() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            metrics_enabled: default_metrics_enabled(),
        }
    }
}

/// Upstream endpoints consulted by the pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// Base URL of the image collection; images live at `{image_base_url}/{id}.png`.
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,
    /// Claim registry batch endpoint (POST `{ shas: [...] }`).
    #[serde(default = "default_verify_endpoint")]
    pub verify_endpoint: String,
    /// JSON array of per-item traits, indexed by item id.
    #[serde(default = "default_traits_url")]
    pub traits_url: String,
    /// Per-request timeout for all upstream calls.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// User-Agent header sent upstream.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_image_base_url() -> String {
    "https://rawcdn.githack.com/proofxyz/moonbirds-assets/refs/heads/main/collection/png"
        .to_string()
}

fn default_verify_endpoint() -> String {
    "https://api.ethscriptions.com/api/ethscriptions/exists_multi".to_string()
}

fn default_traits_url() -> String {
    "https://rawcdn.githack.com/proofxyz/moonbirds-assets/refs/heads/main/traits.json".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("roost/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            image_base_url: default_image_base_url(),
            verify_endpoint: default_verify_endpoint(),
            traits_url: default_traits_url(),
            request_timeout_secs: default_request_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl SourcesConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate source configuration invariants.
    pub fn validate(&self) -> Result<(), String> {
        for (name, url) in [
            ("image_base_url", &self.image_base_url),
            ("verify_endpoint", &self.verify_endpoint),
            ("traits_url", &self.traits_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(format!("sources.{name} must be an http(s) URL, got: {url}"));
            }
        }
        if self.request_timeout_secs == 0 {
            return Err("sources.request_timeout_secs must be greater than zero".to_string());
        }
        Ok(())
    }
}
