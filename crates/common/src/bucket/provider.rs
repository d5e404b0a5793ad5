//! # Providers
//!
//! Providers are the storage nodes a bucket is replicated across. Each entry
//! records:
//!
//! - An **id**, unique within the bucket's provider list
//! - The **owner** operating that node
//!
//! ## Trust Model
//!
//! A provider's owner and the bucket's owner are different principals:
//! buckets are placed on nodes their owner does not control. The
//! owner field is identity metadata and must not leave the registry
//! unredacted; [`Bucket::strip_provider_data`](super::Bucket::strip_provider_data)
//! clears it before a bucket is served to a non-owner caller.

use serde::{Deserialize, Serialize};

use crate::codec::CanonicalEncoded;

/// A storage node entry within a bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Provider {
    /// Identifier of the node, unique within a bucket's provider list.
    pub id: u64,
    /// Identifier of the principal operating the node.
    ///
    /// Empty means "already redacted" or "unknown".
    pub owner: String,
}

impl CanonicalEncoded for Provider {}

impl Provider {
    /// Create a new provider entry.
    pub fn new(id: u64, owner: impl Into<String>) -> Self {
        Self {
            id,
            owner: owner.into(),
        }
    }

    /// Copy of this entry with the owner identity cleared.
    pub fn redacted(&self) -> Self {
        Self {
            id: self.id,
            owner: String::new(),
        }
    }

    /// Whether the owner identity has been cleared.
    pub fn is_redacted(&self) -> bool {
        self.owner.is_empty()
    }
}
