use criterion::{Criterion, black_box, criterion_group, criterion_main};
use eddsa::{Message, SigningKey, VerifyingKey};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bench_sign(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&mut rng);
    let msg = Message::random(&mut rng);

    c.bench_function("eddsa_sign", |bencher| {
        bencher.iter(|| {
            let sig = sk.sign(black_box(&msg)).expect("sign");
            black_box(sig);
        })
    });
}

fn bench_verify(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&mut rng);
    let vk = VerifyingKey::from(&sk);
    let msg = Message::random(&mut rng);
    let sig = sk.sign(&msg).expect("sign");

    c.bench_function("eddsa_verify", |bencher| {
        bencher.iter(|| {
            let ok = vk.verify(black_box(&msg), black_box(&sig)).expect("verify");
            black_box(ok);
        })
    });
}

criterion_group!(benches, bench_sign, bench_verify);
criterion_main!(benches);
