use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::PrimeField;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use curve::{decode_point, encode_point, Affine, Projective, RandomField, ScalarField};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn random_point(rng: &mut StdRng) -> Affine {
    (Affine::generator() * ScalarField::random(rng)).into_affine()
}

fn bench_projective_add(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let g: Projective = random_point(&mut rng).into_group();
    let h: Projective = random_point(&mut rng).into_group();
    c.bench_function("projective_add", |bencher| {
        bencher.iter(|| black_box(black_box(g) + black_box(h)))
    });
}

fn bench_fixed_base_mul(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let scalar = ScalarField::random(&mut rng);
    c.bench_function("fixed_base_mul", |bencher| {
        bencher.iter(|| black_box(Affine::generator().mul_bigint(black_box(scalar).into_bigint())))
    });
}

fn bench_variable_base_mul(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let point = random_point(&mut rng);
    let scalar = ScalarField::random(&mut rng);
    c.bench_function("variable_base_mul", |bencher| {
        bencher.iter(|| black_box(black_box(point).mul_bigint(black_box(scalar).into_bigint())))
    });
}

fn bench_point_decode(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let bytes = encode_point(&random_point(&mut rng));
    c.bench_function("point_decode", |bencher| {
        bencher.iter(|| black_box(decode_point(black_box(&bytes)).expect("decode")))
    });
}

criterion_group!(
    benches,
    bench_projective_add,
    bench_fixed_base_mul,
    bench_variable_base_mul,
    bench_point_decode
);
criterion_main!(benches);
