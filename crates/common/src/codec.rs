//! Canonical encoding for registry values
//!
//! Bucket metadata crosses the registry's boundaries as compact JSON with
//! struct fields in declaration order and empty strings encoded as `""`,
//! never omitted. Encoding equal values always yields identical bytes, so
//! byte comparison of encodings is the registry's equality check; the
//! redaction contract (idempotence, non-aliasing) is stated in terms of it.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Errors from canonical encode/decode.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("codec error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Types with a canonical byte encoding.
///
/// A marker trait: the default methods are the entire implementation, and
/// the serde derive supplies the deterministic field order.
pub trait CanonicalEncoded: Serialize + DeserializeOwned {
    /// Encode to canonical bytes.
    fn encode(&self) -> Result<Vec<u8>, CodecError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decode from canonical bytes.
    fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
