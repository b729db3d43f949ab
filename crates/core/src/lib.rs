//! Core domain types for the roost gallery pipeline.
//!
//! This crate defines the canonical data model used across all other crates:
//! - Content digests and the memoizing hasher
//! - Base64 content URIs
//! - Item ids, resolved items, pages and page windows
//! - The claim-verification wire schema
//! - Per-item trait attributes
//! - Configuration

pub mod attributes;
pub mod config;
pub mod content_uri;
pub mod digest;
pub mod error;
pub mod hasher;
pub mod item;
pub mod verification;

pub use attributes::{Attribute, ItemTraits};
pub use content_uri::ContentUri;
pub use digest::Digest;
pub use error::{Error, Result};
pub use hasher::{HashCache, HashCacheStats};
pub use item::{Item, ItemId, Page, PageItem, PageWindow};
pub use verification::{ClaimStatus, VerificationResult, VerifyRequest};

/// Number of items in the collection.
pub const COLLECTION_SIZE: u32 = 10_000;

/// Items per page; the last page may be shorter.
pub const PAGE_SIZE: u32 = 100;
