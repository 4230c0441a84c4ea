//! Digest computation engine
//!
//! Streams file content through an incremental hash state in bounded-size
//! chunks, so multi-gigabyte blocks never need to be resident in memory.
//! One call is one deterministic attempt: no retries, no partial digests,
//! and the file handle is released on every exit path.

use crate::algorithm::HashAlgorithm;
use crate::digest::ObjectDigest;
use crate::error::{DigestError, Result};
use crate::sink::CloseErrorSink;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Default read chunk size for streaming computation
pub const DEFAULT_BUFFER_SIZE: usize = 1024 * 1024; // 1MB

/// Compute the digest of the object at `path` under `algorithm`
///
/// Requesting [`HashAlgorithm::None`] is a contract violation and fails
/// with [`DigestError::UnsupportedAlgorithm`] before any file is opened.
/// A failure while releasing the handle is reported once through `sink`
/// and never overrides the primary result.
pub fn compute_digest(
    path: &Path,
    algorithm: HashAlgorithm,
    sink: &dyn CloseErrorSink,
) -> Result<ObjectDigest> {
    compute_digest_with_buffer(path, algorithm, DEFAULT_BUFFER_SIZE, sink)
}

/// Compute the digest of the object at `path` with a custom chunk size
pub fn compute_digest_with_buffer(
    path: &Path,
    algorithm: HashAlgorithm,
    buffer_size: usize,
    sink: &dyn CloseErrorSink,
) -> Result<ObjectDigest> {
    match algorithm {
        HashAlgorithm::Sha256 => {
            let file = File::open(path).map_err(|e| DigestError::open(path, e))?;
            let result = stream_sha256(&file, path, buffer_size);
            release_file(file, path, sink);
            result
        }
        HashAlgorithm::None => Err(DigestError::UnsupportedAlgorithm(algorithm)),
    }
}

/// Compute the digest of in-memory data under `algorithm`
pub fn digest_bytes(data: &[u8], algorithm: HashAlgorithm) -> Result<ObjectDigest> {
    match algorithm {
        HashAlgorithm::Sha256 => {
            let mut hasher = Sha256::new();
            hasher.update(data);
            Ok(ObjectDigest::new(
                HashAlgorithm::Sha256,
                hex::encode(hasher.finalize()),
            ))
        }
        HashAlgorithm::None => Err(DigestError::UnsupportedAlgorithm(algorithm)),
    }
}

/// Recompute the digest of `path` under `expected`'s algorithm and compare
///
/// Returns `Ok(false)` when the content no longer matches; computation
/// failures propagate as errors.
pub fn verify_file(
    path: &Path,
    expected: &ObjectDigest,
    sink: &dyn CloseErrorSink,
) -> Result<bool> {
    let actual = compute_digest(path, expected.algorithm, sink)?;
    Ok(actual.matches(expected))
}

fn stream_sha256(file: &File, path: &Path, buffer_size: usize) -> Result<ObjectDigest> {
    // A zero-length buffer would make every read return Ok(0) and yield
    // the empty-input digest for non-empty files.
    let buffer_size = buffer_size.max(1);
    let mut reader = BufReader::with_capacity(buffer_size, file);
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; buffer_size];

    loop {
        let bytes_read = reader
            .read(&mut buffer)
            .map_err(|e| DigestError::read(path, e))?;

        if bytes_read == 0 {
            break;
        }

        hasher.update(&buffer[..bytes_read]);
    }

    Ok(ObjectDigest::new(
        HashAlgorithm::Sha256,
        hex::encode(hasher.finalize()),
    ))
}

/// Release the handle, reporting a close failure through the sink
///
/// The primary result is untouched; the sink hears about the failure at
/// most once.
fn release_file(file: File, path: &Path, sink: &dyn CloseErrorSink) {
    if let Err(err) = close_file(file) {
        sink.close_failed(path, &err);
    }
}

// File's Drop discards the close result; routing the raw close through the
// OS keeps it observable for the sink.
#[cfg(unix)]
fn close_file(file: File) -> std::io::Result<()> {
    use std::os::fd::IntoRawFd;

    nix::unistd::close(file.into_raw_fd())
        .map_err(|errno| std::io::Error::from_raw_os_error(errno as i32))
}

#[cfg(not(unix))]
fn close_file(file: File) -> std::io::Result<()> {
    drop(file);
    Ok(())
}
