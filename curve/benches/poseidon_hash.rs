use criterion::{black_box, criterion_group, criterion_main, Criterion};
use curve::{poseidon_hash, BaseField, RandomField};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_poseidon_challenge(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    // R.x, R.y, A.x, A.y, M
    let inputs: Vec<BaseField> = (0..5).map(|_| BaseField::random(&mut rng)).collect();

    c.bench_function("poseidon_hash_5", |bencher| {
        bencher.iter(|| black_box(poseidon_hash(black_box(&inputs))))
    });
}

fn bench_poseidon_nonce(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(43);
    let inputs = [BaseField::random(&mut rng), BaseField::random(&mut rng)];

    c.bench_function("poseidon_hash_2", |bencher| {
        bencher.iter(|| black_box(poseidon_hash(black_box(&inputs))))
    });
}

criterion_group!(benches, bench_poseidon_challenge, bench_poseidon_nonce);
criterion_main!(benches);
