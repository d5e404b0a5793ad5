//! Bucket data structures and operations
//!
//! This module defines the core types for Amphora's multi-tenant bucket registry:
//!
//! - **[`Bucket`]**: a named collection of stored content, replicated across providers
//! - **[`Provider`]**: a storage node entry within a bucket
//! - **[`BucketName`]**: the namespace-qualified routing key a bucket is registered under
//!
//! # Trust boundaries
//!
//! A bucket's provider entries carry the identity of the principal operating
//! each node. That identity must not leak to callers outside the provider's
//! trust boundary: [`Bucket::strip_provider_data`] produces the privacy-safe
//! copy the registry serves to non-owner callers. Which callers get the
//! redacted view is an authorization decision made above this layer; this
//! module only supplies the mechanical primitive.
//!
//! # Naming
//!
//! Bucket names have the form `namespace:identifier`. The namespace is a
//! routing prefix: a registry can shard or route on it without looking at
//! bucket contents. [`is_valid_bucket_name`] is the boolean check applied at
//! bucket-creation time; [`BucketName::parse`] reports why a candidate was
//! rejected.

#[allow(clippy::module_inception)]
mod bucket;
mod name;
mod provider;

pub use bucket::Bucket;
pub use name::{
    is_valid_bucket_name, BucketName, NameError, MAX_IDENTIFIER_LEN, MAX_NAMESPACE_LEN,
};
pub use provider::Provider;
