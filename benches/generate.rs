use criterion::{black_box, criterion_group, criterion_main, Criterion};
use secure_digits::crypto::random::DeterministicRng;
use secure_digits::{extract, generate_batch, generate_batch_with, MAX_DIGITS};

fn bench_extract(c: &mut Criterion) {
    let buffer: Vec<u8> = (0..MAX_DIGITS as u8).collect();
    c.bench_function("extract_100", |b| b.iter(|| extract(black_box(&buffer), MAX_DIGITS)));
}

fn bench_batch(c: &mut Criterion) {
    c.bench_function("batch_os_100", |b| b.iter(|| generate_batch(black_box("ChaCha20"), 100)));

    let mut rng = DeterministicRng::new(b"bench");
    c.bench_function("batch_deterministic_100", |b| {
        b.iter(|| generate_batch_with(&mut rng, black_box("ChaCha20"), 100))
    });
}

criterion_group!(benches, bench_extract, bench_batch);
criterion_main!(benches);
