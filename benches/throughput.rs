//! Compression and decompression throughput benchmarks.
//!
//! Covers the three workload shapes that matter for a datum compressor:
//! repetitive (best case), structured text (typical case), and random
//! (worst case / refusal path), across the built-in strategies.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use pglz::{compress, decompress, Compressor, Strategy};

fn make_pattern(len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(len);
    let pattern = b"The quick brown fox jumps over the lazy dog. ";
    while out.len() < len {
        out.extend_from_slice(pattern);
    }
    out.truncate(len);
    out
}

fn make_rows(len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(len);
    let mut id = 0u64;
    while out.len() < len {
        out.extend_from_slice(format!("{id}|accountholder|2024-01-15|active|1000.00\n").as_bytes());
        id += 1;
    }
    out.truncate(len);
    out
}

fn make_random(len: usize, mut seed: u32) -> Vec<u8> {
    let mut out = Vec::with_capacity(len);
    while out.len() < len {
        seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        out.push((seed >> 16) as u8);
    }
    out
}

fn bench_compress(c: &mut Criterion) {
    let inputs = [
        ("pattern", make_pattern(64 * 1024)),
        ("rows", make_rows(64 * 1024)),
        ("random", make_random(64 * 1024, 0x1234_5678)),
    ];
    let strategies = [
        ("default", Strategy::DEFAULT),
        ("always", Strategy::ALWAYS),
        ("skip", Strategy::SKIP),
    ];

    let mut group = c.benchmark_group("compress");
    for (input_name, data) in &inputs {
        group.throughput(Throughput::Bytes(data.len() as u64));
        for (strategy_name, strategy) in &strategies {
            group.bench_with_input(
                BenchmarkId::new(*input_name, strategy_name),
                data,
                |b, data| {
                    let mut compressor = Compressor::new();
                    b.iter(|| black_box(compressor.compress(black_box(data), strategy)));
                },
            );
        }
    }
    group.finish();
}

fn bench_decompress(c: &mut Criterion) {
    let inputs = [
        ("pattern", make_pattern(64 * 1024)),
        ("rows", make_rows(64 * 1024)),
    ];

    let mut group = c.benchmark_group("decompress");
    for (input_name, data) in &inputs {
        let packed = compress(data, &Strategy::DEFAULT).unwrap();
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new(*input_name, "strict"), &packed, |b, packed| {
            b.iter(|| black_box(decompress(black_box(packed), data.len(), true).unwrap()));
        });
    }
    group.finish();
}

fn bench_scratch_reuse(c: &mut Criterion) {
    // One-shot scratch vs a reused compressor on a small datum, where the
    // allocation and table reset are a visible fraction of the work.
    let data = make_rows(2048);

    let mut group = c.benchmark_group("scratch");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("one_shot", |b| {
        b.iter(|| black_box(compress(black_box(&data), &Strategy::DEFAULT)));
    });
    group.bench_function("reused", |b| {
        let mut compressor = Compressor::new();
        b.iter(|| black_box(compressor.compress(black_box(&data), &Strategy::DEFAULT)));
    });
    group.finish();
}

criterion_group!(benches, bench_compress, bench_decompress, bench_scratch_reuse);
criterion_main!(benches);
