use bufcodec::{bzip2, deflate};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use std::hint::black_box;

fn bench_codecs(c: &mut Criterion) {
    let mut rng = rand::thread_rng();

    let sizes = [("4k", 4 * 1024), ("64k", 64 * 1024), ("1m", 1024 * 1024)];

    for (name, size) in sizes {
        // Lowercase ASCII: compressible but not degenerate.
        let input: Vec<u8> = (0..size).map(|_| rng.gen_range(b'a'..=b'z')).collect();
        let deflated = deflate::compress(&input).unwrap();
        let bzipped = bzip2::compress(&input).unwrap();

        let mut group = c.benchmark_group(format!("compress_{name}"));
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("deflate", size), &input, |b, i| {
            b.iter(|| deflate::compress(black_box(i)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("bzip2", size), &input, |b, i| {
            b.iter(|| bzip2::compress(black_box(i)).unwrap())
        });
        group.finish();

        let mut group = c.benchmark_group(format!("decompress_{name}"));
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("deflate", size), &deflated, |b, i| {
            b.iter(|| deflate::decompress(black_box(i)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("bzip2", size), &bzipped, |b, i| {
            b.iter(|| bzip2::decompress(black_box(i)).unwrap())
        });
        group.finish();
    }
}

criterion_group!(benches, bench_codecs);
criterion_main!(benches);
