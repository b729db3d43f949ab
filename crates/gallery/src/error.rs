//! Pipeline error types.
//!
//! A [`FetchError`] only ever downgrades one page entry; a
//! [`VerificationError`] fails the whole page.

use roost_core::ItemId;
use roost_sources::SourceError;
use thiserror::Error;

/// An item's image could not be fetched. Never cached.
#[derive(Debug, Error)]
#[error("failed to fetch image for item {id} from {url}: {source}")]
pub struct FetchError {
    pub id: ItemId,
    pub url: String,
    pub source: SourceError,
}

/// The claim registry call failed for a batch.
#[derive(Debug, Error)]
#[error("claim verification failed for batch of {batch_len} digests: {source}")]
pub struct VerificationError {
    pub batch_len: usize,
    pub source: SourceError,
}

/// Page-level failure.
#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    Verification(#[from] VerificationError),

    #[error("item resolution task failed: {0}")]
    Task(String),
}

/// The traits document could not be loaded.
#[derive(Debug, Error)]
#[error("failed to load traits document: {0}")]
pub struct TraitsError(#[from] pub SourceError);
