//! Content digest type.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest as _, Sha256};
use std::fmt;
use std::str::FromStr;

/// Prefix carried by every textual digest.
pub const DIGEST_PREFIX: &str = "0x";

/// A SHA-256 digest, rendered as `0x` followed by 64 lowercase hex characters.
///
/// Digests are opaque content-addressed keys: they are produced by the
/// [`HashCache`](crate::hasher::HashCache) and compared, never interpreted.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest([u8; 32]);

impl Digest {
    /// Create a digest from raw bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Compute the SHA-256 digest of data.
    ///
    /// This bypasses memoization; pipeline code goes through `HashCache`.
    pub fn compute(data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data);
        Self(hasher.finalize().into())
    }

    /// Parse from prefixed hex (`0x` + 64 hex chars, either case).
    pub fn parse(s: &str) -> crate::Result<Self> {
        let digits = s.strip_prefix(DIGEST_PREFIX).ok_or_else(|| {
            crate::Error::InvalidDigest(format!("expected {DIGEST_PREFIX} prefix, got: {s}"))
        })?;
        if digits.len() != 64 {
            return Err(crate::Error::InvalidDigest(format!(
                "expected 64 hex chars, got {}",
                digits.len()
            )));
        }
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|e| crate::Error::InvalidDigest(e.to_string()))?;
        Ok(Self(bytes))
    }

    /// Encode as lowercase hex without the prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{DIGEST_PREFIX}{}", self.to_hex())
    }
}

impl FromStr for Digest {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
