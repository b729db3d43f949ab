//! Claim-verification wire schema.
//!
//! The registry answers a batch query with `{ "result": { <digest>: <claim id | null> } }`.
//! A digest missing from `result` is *unknown*, which is distinct from an
//! explicit `null` (*unclaimed*). Both merge into a page as "no claim".

use crate::digest::Digest;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Request body sent to the claim registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyRequest {
    pub shas: Vec<Digest>,
}

/// Claim status of one digest within a verification result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClaimStatus {
    /// Claimed by the given transaction.
    Claimed(String),
    /// The registry answered `null`.
    Unclaimed,
    /// The registry did not mention this digest.
    Unknown,
}

impl ClaimStatus {
    /// The claim transaction id, if claimed.
    pub fn txhash(&self) -> Option<&str> {
        match self {
            Self::Claimed(tx) => Some(tx),
            Self::Unclaimed | Self::Unknown => None,
        }
    }
}

/// Mapping from digest to claim transaction id (`None` = explicitly unclaimed).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub result: HashMap<Digest, Option<String>>,
}

impl VerificationResult {
    pub fn new(result: HashMap<Digest, Option<String>>) -> Self {
        Self { result }
    }

    /// Parse a registry response body.
    pub fn from_json(body: &[u8]) -> crate::Result<Self> {
        serde_json::from_slice(body).map_err(|e| crate::Error::Serialization(e.to_string()))
    }

    pub fn status(&self, digest: &Digest) -> ClaimStatus {
        match self.result.get(digest) {
            Some(Some(tx)) => ClaimStatus::Claimed(tx.clone()),
            Some(None) => ClaimStatus::Unclaimed,
            None => ClaimStatus::Unknown,
        }
    }

    /// The value merged into a page entry: the claim id or `None`.
    pub fn txhash(&self, digest: &Digest) -> Option<String> {
        self.result.get(digest).cloned().flatten()
    }

    pub fn len(&self) -> usize {
        self.result.len()
    }

    pub fn is_empty(&self) -> bool {
        self.result.is_empty()
    }
}
