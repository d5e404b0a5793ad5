//! Magnet retrieval addresses
//!
//! Content is fetched from providers via magnet links of the form
//! `magnet://host/path`. Addresses arrive from callers the registry does not
//! trust and must be validated before anything dereferences them: an address
//! must parse as a URL, carry the `magnet` scheme, and name a host. Query
//! and fragment are carried through untouched, not interpreted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

/// URL scheme for magnet links.
pub const MAGNET_SCHEME: &str = "magnet";

/// Reasons a candidate magnet address is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MagnetError {
    #[error("not a valid url: {0}")]
    Url(#[from] url::ParseError),
    #[error("expected 'magnet' scheme, got '{0}'")]
    Scheme(String),
    #[error("magnet link names no host")]
    EmptyHost,
}

/// A validated magnet retrieval address.
///
/// Construct with [`MagnetLink::parse`] (or `str::parse`); an existing
/// `MagnetLink` always names a host to fetch from. Serializes as the plain
/// string and re-validates on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MagnetLink(Url);

impl MagnetLink {
    /// Parse and validate a candidate magnet address.
    pub fn parse(address: &str) -> Result<Self, MagnetError> {
        let url = Url::parse(address)?;
        if url.scheme() != MAGNET_SCHEME {
            return Err(MagnetError::Scheme(url.scheme().to_string()));
        }
        match url.host_str() {
            Some(host) if !host.is_empty() => Ok(MagnetLink(url)),
            _ => Err(MagnetError::EmptyHost),
        }
    }

    /// The host to fetch from.
    pub fn host(&self) -> &str {
        self.0.host_str().unwrap_or_default()
    }

    /// The path component of the address.
    pub fn path(&self) -> &str {
        self.0.path()
    }

    /// The address as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// The underlying parsed URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }
}

impl fmt::Display for MagnetLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for MagnetLink {
    type Err = MagnetError;

    fn from_str(address: &str) -> Result<Self, Self::Err> {
        MagnetLink::parse(address)
    }
}

impl TryFrom<String> for MagnetLink {
    type Error = MagnetError;

    fn try_from(address: String) -> Result<Self, Self::Error> {
        MagnetLink::parse(&address)
    }
}

impl From<MagnetLink> for String {
    fn from(link: MagnetLink) -> Self {
        link.0.into()
    }
}

/// Check whether `address` is a well-formed magnet link.
///
/// Total predicate: any malformed input answers `false`. Use
/// [`MagnetLink::parse`] to learn why a candidate was rejected.
pub fn is_valid_magnet(address: &str) -> bool {
    MagnetLink::parse(address).is_ok()
}
