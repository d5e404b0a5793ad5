//! Shared test utilities for bucket integration tests
#![allow(dead_code)]

pub use common::bucket::{Bucket, BucketName, Provider};
pub use common::codec::CanonicalEncoded;

/// Assert that two values' canonical encodings are, or are not, byte-identical.
pub fn assert_canonical_eq<T: CanonicalEncoded>(lhs: &T, rhs: &T, expected: bool) {
    let lhs = String::from_utf8(lhs.encode().unwrap()).unwrap();
    let rhs = String::from_utf8(rhs.encode().unwrap()).unwrap();
    assert_eq!(
        lhs == rhs,
        expected,
        "\nLHS: {lhs}\nRHS: {rhs}\nexpected equality: {expected}"
    );
}

/// A bucket with one unredacted provider, as the registry would hold it.
pub fn blog_bucket() -> Bucket {
    Bucket::new(
        "blogapp:bucket1".parse().unwrap(),
        "jim",
        vec![Provider::new(2, "bob")],
        7,
    )
}
