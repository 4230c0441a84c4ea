//! Close-failure diagnostic sink
//!
//! A close error after a successful read must not invalidate an
//! otherwise-correct digest, but it must not be dropped silently either.
//! The engine reports it through this side channel, at most once per
//! computation, leaving the primary result untouched.

use std::path::Path;

/// Sink for file-close failures
///
/// Implementations must not panic; the engine calls this while a primary
/// result is already in flight.
pub trait CloseErrorSink {
    /// Report that releasing the handle for `path` failed with `err`
    fn close_failed(&self, path: &Path, err: &std::io::Error);
}

/// Production sink that emits a `tracing` warning
///
/// The embedding application owns subscriber configuration; without one
/// installed the event is discarded, which is the correct behavior for
/// library code.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl CloseErrorSink for TracingSink {
    fn close_failed(&self, path: &Path, err: &std::io::Error) {
        tracing::warn!(path = %path.display(), error = %err, "failed to close file after hashing");
    }
}
