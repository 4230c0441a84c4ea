//! Hash algorithm registry
//!
//! A closed enumeration of the hash functions recognized by block
//! metadata. Keeping this a sum type (rather than an open string) means
//! adding an algorithm is a compile-time-checked exhaustive-match update
//! everywhere digests are produced or consumed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hash algorithm recorded alongside a block digest
///
/// The serialized form matches the persisted metadata format: `"SHA256"`
/// for SHA-256 and the empty string for [`None`](HashAlgorithm::None).
/// An algorithm's encoded digest is self-describing only in combination
/// with this stored identifier, never inferred from the value's shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HashAlgorithm {
    /// No hash was requested or stored. A legal sentinel for persisted
    /// metadata, but not a valid computation request.
    #[default]
    #[serde(rename = "")]
    None,
    /// SHA-256 - standard cryptographic hash (256-bit)
    #[serde(rename = "SHA256")]
    Sha256,
}

impl HashAlgorithm {
    /// Whether this algorithm has a concrete computation implementation
    pub fn is_computable(&self) -> bool {
        match self {
            Self::None => false,
            Self::Sha256 => true,
        }
    }

    /// Get the native digest output size in bytes (0 for `None`)
    pub fn output_size(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Sha256 => 32,
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sha256 => "SHA-256",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
