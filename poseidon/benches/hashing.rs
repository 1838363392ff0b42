use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use felt252_field::types::Sample;
use felt252_field::Felt;
use felt252_poseidon::params::SPONGE_WIDTH;
use felt252_poseidon::{poseidon_hash, poseidon_hash_many, poseidon_permute_comp};

pub(crate) fn bench_poseidon(c: &mut Criterion) {
    c.bench_function("hades-permutation", |b| {
        b.iter_batched(
            Felt::rand_array::<SPONGE_WIDTH>,
            |mut state| {
                poseidon_permute_comp(&mut state);
                state
            },
            BatchSize::SmallInput,
        )
    });

    c.bench_function("poseidon-hash", |b| {
        b.iter_batched(
            || (Felt::rand(), Felt::rand()),
            |(x, y)| poseidon_hash(x, y),
            BatchSize::SmallInput,
        )
    });

    for len in [4, 32, 256] {
        c.bench_function(&format!("poseidon-hash-many<{len}>"), |b| {
            b.iter_batched(
                || Felt::rand_vec(len),
                |inputs| poseidon_hash_many(&inputs),
                BatchSize::SmallInput,
            )
        });
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    bench_poseidon(c);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
