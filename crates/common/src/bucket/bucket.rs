//! # Buckets
//!
//! The registry's record of a named collection of stored content. A bucket
//! carries its routing key, its controlling principal, the ordered list of
//! providers it is replicated across, and its stored size.
//!
//! Provider order is placement order and is significant to callers; every
//! operation here preserves it.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::codec::CanonicalEncoded;

use super::name::BucketName;
use super::provider::Provider;

/// A named collection of stored content, replicated across providers.
///
/// # Serialization
///
/// Buckets encode as compact JSON with fields in declaration order; two
/// buckets are equal for registry purposes iff their encodings are
/// byte-identical. See [`CanonicalEncoded`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    /// Namespace-qualified routing key, unique across the registry.
    name: String,
    /// Identifier of the bucket's controlling principal.
    owner: String,
    /// Storage nodes the bucket is replicated across, in placement order.
    providers: Vec<Provider>,
    /// Bytes stored.
    size: u64,
}

impl CanonicalEncoded for Bucket {}

impl Bucket {
    /// Create a new bucket record.
    ///
    /// Taking a [`BucketName`] keeps the grammar invariant structural: a
    /// bucket cannot be constructed under a name the registry would refuse
    /// to route.
    pub fn new(
        name: BucketName,
        owner: impl Into<String>,
        providers: Vec<Provider>,
        size: u64,
    ) -> Self {
        Bucket {
            name: name.into(),
            owner: owner.into(),
            providers,
            size,
        }
    }

    /// Get the bucket's routing key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the bucket's controlling principal.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Get the stored size in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Set the stored size in bytes.
    pub fn set_size(&mut self, size: u64) {
        self.size = size;
    }

    /// Get the providers in placement order.
    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    /// Get mutable access to the provider list.
    pub fn providers_mut(&mut self) -> &mut Vec<Provider> {
        &mut self.providers
    }

    /// Look up a provider entry by id.
    pub fn provider(&self, id: u64) -> Option<&Provider> {
        self.providers.iter().find(|p| p.id == id)
    }

    /// Append a provider to the placement order.
    pub fn add_provider(&mut self, provider: Provider) {
        self.providers.push(provider);
    }

    /// Remove a provider entry by id, preserving the order of the rest.
    pub fn remove_provider(&mut self, id: u64) -> Option<Provider> {
        let index = self.providers.iter().position(|p| p.id == id)?;
        Some(self.providers.remove(index))
    }

    /// Whether every provider's owner identity has been cleared.
    pub fn is_redacted(&self) -> bool {
        self.providers.iter().all(Provider::is_redacted)
    }

    /// Privacy-safe copy of this bucket for callers outside the provider
    /// trust boundary.
    ///
    /// The returned bucket matches `self` in name, owner, size, and provider
    /// count/order, with every provider's owner cleared. The copy shares no
    /// storage with `self`: mutating either value afterwards never affects
    /// the other. Redacting an already-redacted bucket returns a value whose
    /// canonical encoding is byte-identical to the input's.
    pub fn strip_provider_data(&self) -> Bucket {
        trace!(
            bucket = %self.name,
            providers = self.providers.len(),
            "stripping provider data"
        );
        Bucket {
            name: self.name.clone(),
            owner: self.owner.clone(),
            providers: self.providers.iter().map(Provider::redacted).collect(),
            size: self.size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blog_bucket() -> Bucket {
        Bucket::new(
            "blogapp:bucket1".parse().unwrap(),
            "jim",
            vec![Provider::new(2, "bob")],
            7,
        )
    }

    #[test]
    fn test_bucket_encode_decode() {
        let bucket = blog_bucket();

        let encoded = bucket.encode().unwrap();
        let decoded = Bucket::decode(&encoded).unwrap();

        assert_eq!(bucket, decoded);
    }

    #[test]
    fn test_canonical_field_order() {
        let encoded = blog_bucket().encode().unwrap();
        assert_eq!(
            String::from_utf8(encoded).unwrap(),
            r#"{"name":"blogapp:bucket1","owner":"jim","providers":[{"id":2,"owner":"bob"}],"size":7}"#
        );
    }

    #[test]
    fn test_provider_lookup() {
        let mut bucket = blog_bucket();
        bucket.add_provider(Provider::new(5, "eve"));

        assert_eq!(bucket.provider(2).map(|p| p.owner.as_str()), Some("bob"));
        assert_eq!(bucket.provider(5).map(|p| p.owner.as_str()), Some("eve"));
        assert!(bucket.provider(9).is_none());
    }

    #[test]
    fn test_remove_provider_preserves_order() {
        let mut bucket = Bucket::new(
            "blogapp:bucket1".parse().unwrap(),
            "jim",
            vec![
                Provider::new(9, "p1"),
                Provider::new(4, "p2"),
                Provider::new(7, "p3"),
            ],
            0,
        );

        let removed = bucket.remove_provider(4).unwrap();
        assert_eq!(removed.owner, "p2");

        let ids: Vec<u64> = bucket.providers().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![9, 7]);
        assert!(bucket.remove_provider(4).is_none());
    }
}
