//! Bucket naming grammar
//!
//! Bucket names are namespace-qualified routing keys of the form
//! `namespace:identifier`, with exactly one `:` and both parts non-empty.
//! Every character outside the separator must be ASCII alphanumeric or `-`.
//!
//! - **namespace**: starts with a letter, does not end with `-`, at most
//!   [`MAX_NAMESPACE_LEN`] characters. Routing layers shard on this prefix
//!   without parsing bucket contents, so it carries the stricter rules.
//! - **identifier**: starts with a letter or digit (never `-`), at most
//!   [`MAX_IDENTIFIER_LEN`] characters. Mixed case is allowed; a trailing
//!   `-` is permitted here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Maximum length of the namespace component.
pub const MAX_NAMESPACE_LEN: usize = 25;
/// Maximum length of the identifier component.
pub const MAX_IDENTIFIER_LEN: usize = 64;

/// Reasons a candidate bucket name is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    #[error("bucket name must contain exactly one ':'")]
    Separator,
    #[error("namespace must be 1 to 25 characters, got {0}")]
    NamespaceLength(usize),
    #[error("namespace must start with an ASCII letter")]
    NamespaceStart,
    #[error("namespace must not end with '-'")]
    NamespaceTrailingHyphen,
    #[error("identifier must be 1 to 64 characters, got {0}")]
    IdentifierLength(usize),
    #[error("identifier must not start with '-'")]
    IdentifierStart,
    #[error("invalid character {0:?} in bucket name")]
    InvalidCharacter(char),
}

/// A validated namespace-qualified bucket name.
///
/// Construct with [`BucketName::parse`] (or `str::parse`); an existing
/// `BucketName` always satisfies the grammar, so the registry can treat it
/// as a routing key without re-checking. Serializes as the plain string and
/// re-validates on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BucketName {
    name: String,
    // byte offset of the ':' separator in `name`
    split: usize,
}

impl BucketName {
    /// Parse and validate a candidate bucket name.
    pub fn parse(name: &str) -> Result<Self, NameError> {
        let split = name.find(':').ok_or(NameError::Separator)?;
        let (namespace, identifier) = (&name[..split], &name[split + 1..]);
        if identifier.contains(':') {
            return Err(NameError::Separator);
        }
        validate_namespace(namespace)?;
        validate_identifier(identifier)?;
        Ok(BucketName {
            name: name.to_string(),
            split,
        })
    }

    /// The routing prefix before the `:`.
    pub fn namespace(&self) -> &str {
        &self.name[..self.split]
    }

    /// The bucket's name within its namespace, after the `:`.
    pub fn identifier(&self) -> &str {
        &self.name[self.split + 1..]
    }

    /// The full name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for BucketName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl FromStr for BucketName {
    type Err = NameError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        BucketName::parse(name)
    }
}

impl TryFrom<String> for BucketName {
    type Error = NameError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        BucketName::parse(&name)
    }
}

impl From<BucketName> for String {
    fn from(name: BucketName) -> Self {
        name.name
    }
}

impl AsRef<str> for BucketName {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

/// Check whether `name` is a well-formed bucket name.
///
/// Total predicate applied at the bucket-creation boundary; any malformed
/// input answers `false`. Use [`BucketName::parse`] to learn why a candidate
/// was rejected.
pub fn is_valid_bucket_name(name: &str) -> bool {
    BucketName::parse(name).is_ok()
}

fn validate_namespace(namespace: &str) -> Result<(), NameError> {
    if namespace.is_empty() || namespace.len() > MAX_NAMESPACE_LEN {
        return Err(NameError::NamespaceLength(namespace.len()));
    }
    let mut chars = namespace.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        Some(c) if !is_name_char(c) => return Err(NameError::InvalidCharacter(c)),
        _ => return Err(NameError::NamespaceStart),
    }
    for c in chars {
        if !is_name_char(c) {
            return Err(NameError::InvalidCharacter(c));
        }
    }
    if namespace.ends_with('-') {
        return Err(NameError::NamespaceTrailingHyphen);
    }
    Ok(())
}

fn validate_identifier(identifier: &str) -> Result<(), NameError> {
    if identifier.is_empty() || identifier.len() > MAX_IDENTIFIER_LEN {
        return Err(NameError::IdentifierLength(identifier.len()));
    }
    let mut chars = identifier.chars();
    match chars.next() {
        Some('-') => return Err(NameError::IdentifierStart),
        Some(c) if !is_name_char(c) => return Err(NameError::InvalidCharacter(c)),
        _ => {}
    }
    for c in chars {
        if !is_name_char(c) {
            return Err(NameError::InvalidCharacter(c));
        }
    }
    Ok(())
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}
