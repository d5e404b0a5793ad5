/**
 * Core bucket data model.
 *  The Bucket / Provider records tracked by
 *  the registry, the naming grammar their
 *  routing keys must satisfy, and the
 *  redaction primitive applied before a
 *  bucket crosses a trust boundary.
 */
pub mod bucket;
/**
 * Canonical encoding for registry values.
 *  Defines the byte representation under
 *  which two buckets are judged equal.
 */
pub mod codec;
/**
 * Validation of magnet retrieval addresses
 *  before they are dereferenced.
 */
pub mod magnet;

pub mod prelude {
    pub use crate::bucket::{is_valid_bucket_name, Bucket, BucketName, NameError, Provider};
    pub use crate::codec::{CanonicalEncoded, CodecError};
    pub use crate::magnet::{is_valid_magnet, MagnetError, MagnetLink};
}
