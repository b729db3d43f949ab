//! Upstream sources for roost.
//!
//! This crate provides:
//! - The image source, claim registry and traits source abstractions
//! - HTTP backends for each, sharing one configured client

pub mod backends;
pub mod error;
pub mod traits;

pub use backends::http::{HttpClaimRegistry, HttpImageSource, HttpTraitsSource};
pub use error::{SourceError, SourceResult};
pub use traits::{ClaimRegistry, ImageSource, TraitsSource};

use roost_core::config::SourcesConfig;
use std::sync::Arc;

/// The set of upstream sources the pipeline depends on.
#[derive(Clone)]
pub struct Sources {
    pub images: Arc<dyn ImageSource>,
    pub registry: Arc<dyn ClaimRegistry>,
    pub traits: Arc<dyn TraitsSource>,
}

/// Create the HTTP sources from configuration.
pub fn from_config(config: &SourcesConfig) -> SourceResult<Sources> {
    config.validate().map_err(SourceError::Config)?;

    let http = backends::http::build_client(config)?;
    Ok(Sources {
        images: Arc::new(HttpImageSource::new(http.clone(), &config.image_base_url)),
        registry: Arc::new(HttpClaimRegistry::new(http.clone(), &config.verify_endpoint)),
        traits: Arc::new(HttpTraitsSource::new(http, &config.traits_url)),
    })
}
