//! Side-by-side throughput: sha3-rs vs the RustCrypto `sha3` crate.

use core::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{Digest, Sha3_256, Sha3_512, Shake128};

fn message(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

fn bench_sha3_256(c: &mut Criterion) {
    let mut g = c.benchmark_group("sha3-256");
    for len in [32usize, 136, 1024, 16384] {
        let msg = message(len);
        g.throughput(Throughput::Bytes(len as u64));
        g.bench_function(BenchmarkId::new("sha3-rs", len), |b| {
            b.iter(|| black_box(sha3_rs::sha3_256(black_box(&msg))));
        });
        g.bench_function(BenchmarkId::new("rustcrypto", len), |b| {
            b.iter(|| black_box(Sha3_256::digest(black_box(&msg))));
        });
    }
    g.finish();
}

fn bench_sha3_512(c: &mut Criterion) {
    let mut g = c.benchmark_group("sha3-512");
    for len in [72usize, 1024, 16384] {
        let msg = message(len);
        g.throughput(Throughput::Bytes(len as u64));
        g.bench_function(BenchmarkId::new("sha3-rs", len), |b| {
            b.iter(|| black_box(sha3_rs::sha3_512(black_box(&msg))));
        });
        g.bench_function(BenchmarkId::new("rustcrypto", len), |b| {
            b.iter(|| black_box(Sha3_512::digest(black_box(&msg))));
        });
    }
    g.finish();
}

fn bench_shake128(c: &mut Criterion) {
    let mut g = c.benchmark_group("shake128");
    let msg = message(64);
    for out_len in [32usize, 168, 1024] {
        g.throughput(Throughput::Bytes(out_len as u64));
        g.bench_function(BenchmarkId::new("sha3-rs", out_len), |b| {
            b.iter(|| {
                let mut out = [0u8; 1024];
                sha3_rs::shake128(black_box(&msg), &mut out[..out_len]);
                black_box(out);
            });
        });
        g.bench_function(BenchmarkId::new("rustcrypto", out_len), |b| {
            b.iter(|| {
                let mut out = [0u8; 1024];
                let mut h = Shake128::default();
                h.update(black_box(&msg));
                h.finalize_xof().read(&mut out[..out_len]);
                black_box(out);
            });
        });
    }
    g.finish();
}

criterion_group!(benches, bench_sha3_256, bench_sha3_512, bench_shake128);
criterion_main!(benches);
