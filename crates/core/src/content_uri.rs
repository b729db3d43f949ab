//! Canonical base64 content URIs.
//!
//! The content hash of an item is computed over the encoded URI string, not
//! the raw image bytes, so the encoding must be byte-exact standard base64
//! (RFC 4648 alphabet, `=` padding).

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Media-type header shared by every content URI.
pub const CONTENT_URI_PREFIX: &str = "data:image/png;base64,";

/// A self-contained `data:image/png;base64,<payload>` string.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentUri(String);

impl ContentUri {
    /// Encode raw image bytes. Pure and deterministic.
    pub fn encode(bytes: &[u8]) -> Self {
        let mut uri = String::with_capacity(CONTENT_URI_PREFIX.len() + bytes.len().div_ceil(3) * 4);
        uri.push_str(CONTENT_URI_PREFIX);
        STANDARD.encode_string(bytes, &mut uri);
        Self(uri)
    }

    /// Wrap an existing URI string, checking its header.
    pub fn parse(s: &str) -> crate::Result<Self> {
        if !s.starts_with(CONTENT_URI_PREFIX) {
            return Err(crate::Error::InvalidContentUri(format!(
                "expected {CONTENT_URI_PREFIX} header"
            )));
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// The base64 payload after the media-type header.
    pub fn payload(&self) -> &str {
        &self.0[CONTENT_URI_PREFIX.len()..]
    }

    /// Decode the payload back to the original bytes.
    pub fn decode_payload(&self) -> crate::Result<Vec<u8>> {
        STANDARD
            .decode(self.payload())
            .map_err(|e| crate::Error::InvalidContentUri(e.to_string()))
    }

    /// Transaction calldata for inscribing this URI: `0x` + hex of its UTF-8 bytes.
    pub fn calldata_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0.as_bytes()))
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for ContentUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentUri({} payload chars)", self.payload().len())
    }
}

impl fmt::Display for ContentUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
