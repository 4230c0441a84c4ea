//! # Blocksum - Content-Integrity Hashing for Storage Blocks
//!
//! Blocksum computes and verifies content-integrity digests for immutable
//! objects held in block-based storage (e.g. time-series blocks persisted
//! to object storage). Given a path and a hash algorithm it produces a
//! typed, serializable digest that callers attach to block metadata;
//! recomputing and comparing that digest later detects corruption,
//! incomplete uploads, and tampering.
//!
//! ## Features
//!
//! - **Streaming Computation**: Bounded-memory hashing of arbitrarily
//!   large objects, one chunk at a time
//! - **Closed Algorithm Registry**: A sum type over recognized algorithms,
//!   so extensions are compile-time-checked everywhere digests flow
//! - **Typed Failures**: Open, read, and unsupported-algorithm errors are
//!   distinct and carry path context
//! - **Leak-Free Handles**: The file handle is released on every exit
//!   path; close failures surface through a diagnostic sink instead of
//!   competing with the primary result
//! - **Metadata Wire Format**: Digests serialize to the `hashFunc` /
//!   `value` field pair persisted by the metadata layer
//!
//! ## Quick Start
//!
//! ```no_run
//! use blocksum::{compute_digest, HashAlgorithm, TracingSink};
//! use std::path::Path;
//!
//! let digest = compute_digest(
//!     Path::new("/blocks/01HXYZ/chunks/000001"),
//!     HashAlgorithm::Sha256,
//!     &TracingSink,
//! ).unwrap();
//!
//! println!("sha256: {digest}");
//! ```
//!
//! ## Verification
//!
//! ```no_run
//! use blocksum::{compute_digest, verify_file, HashAlgorithm, TracingSink};
//! use std::path::Path;
//!
//! let path = Path::new("/blocks/01HXYZ/index");
//! let recorded = compute_digest(path, HashAlgorithm::Sha256, &TracingSink).unwrap();
//!
//! // Later, after download or on a verification sweep:
//! if !verify_file(path, &recorded, &TracingSink).unwrap() {
//!     eprintln!("block content changed since upload");
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithm;
pub mod digest;
pub mod engine;
pub mod error;
pub mod sink;

// Re-export commonly used types
pub use algorithm::HashAlgorithm;
pub use digest::ObjectDigest;
pub use engine::{compute_digest, compute_digest_with_buffer, digest_bytes, verify_file};
pub use error::{DigestError, Result};
pub use sink::{CloseErrorSink, TracingSink};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
