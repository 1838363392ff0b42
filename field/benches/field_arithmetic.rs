use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use felt252_field::types::Sample;
use felt252_field::Felt;

pub(crate) fn bench_field(c: &mut Criterion) {
    c.bench_function("mul-throughput", |b| {
        b.iter_batched(
            || (Felt::rand(), Felt::rand(), Felt::rand(), Felt::rand()),
            |(mut x, mut y, mut z, mut w)| {
                for _ in 0..25 {
                    (x, y, z, w) = (x * y, y * z, z * w, w * x);
                }
                (x, y, z, w)
            },
            BatchSize::SmallInput,
        )
    });

    c.bench_function("mul-latency", |b| {
        b.iter_batched(
            Felt::rand,
            |mut x| {
                for _ in 0..100 {
                    x = x * x;
                }
                x
            },
            BatchSize::SmallInput,
        )
    });

    c.bench_function("sqr-latency", |b| {
        b.iter_batched(
            Felt::rand,
            |mut x| {
                for _ in 0..100 {
                    x = x.square();
                }
                x
            },
            BatchSize::SmallInput,
        )
    });

    c.bench_function("add-latency", |b| {
        b.iter_batched(
            Felt::rand,
            |mut x| {
                for _ in 0..100 {
                    x = x + x;
                }
                x
            },
            BatchSize::SmallInput,
        )
    });

    c.bench_function("inverse", |b| {
        b.iter_batched(Felt::rand, |x| x.inverse(), BatchSize::SmallInput)
    });

    c.bench_function("sqrt", |b| {
        b.iter_batched(Felt::rand, |x| x.sqrt(), BatchSize::SmallInput)
    });

    c.bench_function("from_hex", |b| {
        let hex = Felt::rand().to_hex_string();
        b.iter(|| Felt::from_hex(black_box(&hex)))
    });

    c.bench_function("to_dec_string", |b| {
        b.iter_batched(Felt::rand, |x| x.to_dec_string(), BatchSize::SmallInput)
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    bench_field(c);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
