use criterion::{Criterion, black_box, criterion_group, criterion_main};
use drik_eph::{Engine, Location};
use drik_vedic::{gregorian_to_hindu, tithi_at_sunrise};

fn bench_vedic(c: &mut Criterion) {
    let loc = Location::NEW_DELHI;

    c.bench_function("tithi_at_sunrise", |b| {
        let mut engine = Engine::new();
        b.iter(|| tithi_at_sunrise(&mut engine, black_box(2024), 4, 9, &loc))
    });

    c.bench_function("gregorian_to_hindu", |b| {
        let mut engine = Engine::new();
        b.iter(|| gregorian_to_hindu(&mut engine, black_box(2024), 4, 9, &loc))
    });
}

criterion_group!(benches, bench_vedic);
criterion_main!(benches);
