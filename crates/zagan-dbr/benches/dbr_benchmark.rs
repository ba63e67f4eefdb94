//! Benchmarks for DBR encoding and decoding.
//!
//! Run with: `cargo bench -p zagan-dbr`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use zagan_core::{Decoder, Encoder};
use zagan_dbr::DbrCodec;

/// Generate test data with a varying alphabet skew.
///
/// High skew concentrates mass on a few symbols (text-like); low skew is
/// uniform random. The transform is O(n) either way, but skew shapes the
/// sort input for the rank table.
fn generate_test_data(size: usize, skew: f64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut data = Vec::with_capacity(size);

    if skew > 0.5 {
        let common: &[u8] = b"etaoin shrdlu";
        while data.len() < size {
            if rng.gen_bool(skew) {
                data.push(common[rng.gen_range(0..common.len())]);
            } else {
                data.push(rng.r#gen::<u8>());
            }
        }
    } else {
        data.resize(size, 0);
        rng.fill(&mut data[..]);
    }

    data
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("dbr_encode");
    let codec = DbrCodec::new();

    for size in [4 * 1024, 64 * 1024, 1024 * 1024] {
        let data = generate_test_data(size, 0.8);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("skewed", size), &data, |b, data| {
            b.iter(|| codec.encode(black_box(data)).unwrap());
        });

        let data = generate_test_data(size, 0.0);
        group.bench_with_input(BenchmarkId::new("random", size), &data, |b, data| {
            b.iter(|| codec.encode(black_box(data)).unwrap());
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("dbr_decode");
    let codec = DbrCodec::new();

    for size in [4 * 1024, 64 * 1024, 1024 * 1024] {
        let artifact = codec.encode(&generate_test_data(size, 0.8)).unwrap();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::new("skewed", size),
            &artifact,
            |b, artifact| {
                b.iter(|| codec.decode(black_box(artifact)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
