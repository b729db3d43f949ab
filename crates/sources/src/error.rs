//! Source error types.

use thiserror::Error;

/// Upstream source errors.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("upstream returned {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to encode request: {0}")]
    Encode(String),

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl SourceError {
    /// HTTP status reported by the upstream, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type for source operations.
pub type SourceResult<T> = std::result::Result<T, SourceError>;
