//! Performance benchmarks for Blocksum
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::fs::File;
use std::io::Write;
use tempfile::TempDir;

/// Create a test file of the specified size
fn create_test_file(dir: &std::path::Path, name: &str, size: usize) -> std::path::PathBuf {
    let path = dir.join(name);
    let mut file = File::create(&path).unwrap();

    let chunk_size = 64 * 1024;
    let chunk: Vec<u8> = (0..chunk_size).map(|i| (i % 256) as u8).collect();
    let mut remaining = size;

    while remaining > 0 {
        let to_write = remaining.min(chunk_size);
        file.write_all(&chunk[..to_write]).unwrap();
        remaining -= to_write;
    }

    path
}

fn bench_digest_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("digest_file");

    for size in [1024 * 1024, 10 * 1024 * 1024, 100 * 1024 * 1024].iter() {
        let dir = TempDir::new().unwrap();
        let file = create_test_file(dir.path(), "chunk.bin", *size);

        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(
            BenchmarkId::new(
                "sha256",
                humansize::format_size(*size as u64, humansize::BINARY),
            ),
            size,
            |b, _| {
                b.iter(|| {
                    let digest = blocksum::compute_digest(
                        &file,
                        blocksum::HashAlgorithm::Sha256,
                        &blocksum::TracingSink,
                    );
                    let _ = black_box(digest);
                });
            },
        );
    }

    group.finish();
}

fn bench_buffer_sizes(c: &mut Criterion) {
    let size = 32 * 1024 * 1024;
    let dir = TempDir::new().unwrap();
    let file = create_test_file(dir.path(), "chunk.bin", size);

    let mut group = c.benchmark_group("digest_buffer_sizes");
    group.throughput(Throughput::Bytes(size as u64));

    for buffer_size in [64 * 1024, 256 * 1024, 1024 * 1024, 4 * 1024 * 1024].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(humansize::format_size(
                *buffer_size as u64,
                humansize::BINARY,
            )),
            buffer_size,
            |b, &buffer_size| {
                b.iter(|| {
                    let digest = blocksum::compute_digest_with_buffer(
                        &file,
                        blocksum::HashAlgorithm::Sha256,
                        buffer_size,
                        &blocksum::TracingSink,
                    );
                    let _ = black_box(digest);
                });
            },
        );
    }

    group.finish();
}

fn bench_digest_bytes(c: &mut Criterion) {
    let data: Vec<u8> = (0..4 * 1024 * 1024).map(|i| (i % 256) as u8).collect();

    let mut group = c.benchmark_group("digest_bytes");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("sha256_4MiB", |b| {
        b.iter(|| {
            let digest = blocksum::digest_bytes(black_box(&data), blocksum::HashAlgorithm::Sha256);
            let _ = black_box(digest);
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_digest_file,
    bench_buffer_sizes,
    bench_digest_bytes
);
criterion_main!(benches);
