//! Benchmarks for the double-SHA256 hasher and nonce search.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use miner_core::{double_sha256, mine, mine_parallel, Payload};

fn bench_double_sha256(c: &mut Criterion) {
    let input = b"hello world\x00\x00\x00\x00";

    c.bench_function("double_sha256", |b| b.iter(|| double_sha256(black_box(input))));
}

fn bench_payload_varying_nonce(c: &mut Criterion) {
    let mut payload = Payload::new(b"hello world");

    c.bench_function("payload_varying_nonce", |b| {
        let mut nonce: u32 = 0;
        b.iter(|| {
            payload.set_nonce(nonce);
            nonce = nonce.wrapping_add(1);
            payload.digest()
        })
    });
}

fn bench_mine(c: &mut Criterion) {
    let mut group = c.benchmark_group("mine");
    group.sample_size(20);

    group.bench_function("sequential_difficulty_3", |b| {
        b.iter(|| mine(black_box(b"hello world"), 3, 100_000))
    });
    group.bench_function("parallel_difficulty_3", |b| {
        b.iter(|| mine_parallel(black_box(b"hello world"), 3, 100_000, 4))
    });

    group.finish();
}

criterion_group!(benches, bench_double_sha256, bench_payload_varying_nonce, bench_mine);
criterion_main!(benches);
