//! Digest value object
//!
//! An [`ObjectDigest`] pairs the algorithm identifier with the
//! lowercase-hex digest of an object's content. It is an immutable
//! snapshot: the engine constructs it once and the metadata layer
//! serializes it verbatim.

use crate::algorithm::HashAlgorithm;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Content-integrity digest of an object in block storage
///
/// Serializes to the metadata wire format: a `hashFunc` field holding the
/// algorithm identifier and a `value` field holding the hex string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectDigest {
    /// Algorithm that produced the digest
    #[serde(rename = "hashFunc")]
    pub algorithm: HashAlgorithm,
    /// Lowercase hex encoding of the raw digest bytes; exactly twice the
    /// algorithm's output size in characters, empty for the none sentinel
    pub value: String,
}

impl ObjectDigest {
    pub(crate) fn new(algorithm: HashAlgorithm, value: String) -> Self {
        Self { algorithm, value }
    }

    /// The "hashing was skipped" stored state
    pub fn none() -> Self {
        Self {
            algorithm: HashAlgorithm::None,
            value: String::new(),
        }
    }

    /// Whether this digest is the none sentinel
    pub fn is_none(&self) -> bool {
        self.algorithm == HashAlgorithm::None
    }

    /// Compare digest values byte-for-byte via their hex encodings
    ///
    /// The `algorithm` field is intentionally not compared: metadata is
    /// generated under one pipeline's consistent algorithm choice, so the
    /// stored identifiers always agree in practice. Revisit if a second
    /// concrete algorithm is ever registered.
    pub fn matches(&self, other: &ObjectDigest) -> bool {
        self.value == other.value
    }
}

impl fmt::Display for ObjectDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
