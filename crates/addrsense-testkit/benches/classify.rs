//! Classification throughput over the golden vectors.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use addrsense_core::{validate_resolved, ValidationOptions};
use addrsense_testkit::fixtures::OptionsFixture;
use addrsense_testkit::vectors::all_vectors;

/// Every vector, each with its own options parsed from JSON per call.
fn bench_vectors_untyped(c: &mut Criterion) {
    let vectors = all_vectors();
    c.bench_function("golden_vectors_untyped", |b| {
        b.iter(|| {
            for vector in &vectors {
                black_box(vector.classify());
            }
        })
    });
}

/// One input per family under pre-resolved default options.
fn bench_per_family(c: &mut Criterion) {
    let mut group = c.benchmark_group("per_family");
    let resolved = ValidationOptions::default()
        .resolve()
        .unwrap_or_default();

    let inputs = [
        ("evm", "0x4838B106FCe9647Bdf1E7877BF73cE8B0BAD5f97"),
        ("xcb", "cb7147879011ea207df5b35a24ca6f0859dcfb145999"),
        ("bitcoin", "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa"),
        ("cosmos", "cosmos1hsk6jryyqjfhp5dhc55tc9jtckygx0eph6dd02"),
        ("solana", "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM"),
        ("bitcoincash", "bitcoincash:qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a"),
        ("unknown", "definitely not an address"),
    ];

    // Later stages pay for every earlier stage that declines.
    for (family, address) in inputs {
        group.bench_with_input(BenchmarkId::new("classify", family), &address, |b, input| {
            b.iter(|| validate_resolved(black_box(input), &resolved, false))
        });
    }

    group.finish();
}

/// Name-service lookups against a two-suffix configuration.
fn bench_name_service(c: &mut Criterion) {
    let fixture = OptionsFixture::ens();
    c.bench_function("name_service", |b| {
        b.iter(|| fixture.classify(black_box("pay.jesse.base.eth")))
    });
}

criterion_group!(benches, bench_vectors_untyped, bench_per_family, bench_name_service);
criterion_main!(benches);
