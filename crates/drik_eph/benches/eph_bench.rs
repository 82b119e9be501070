use criterion::{Criterion, black_box, criterion_group, criterion_main};
use drik_eph::{Engine, Location};

fn bench_engine(c: &mut Criterion) {
    let mut engine = Engine::new();
    let jd = 2_460_000.5;

    c.bench_function("solar_longitude", |b| {
        b.iter(|| engine.solar_longitude(black_box(jd)))
    });

    c.bench_function("lunar_longitude", |b| {
        b.iter(|| engine.lunar_longitude(black_box(jd)))
    });

    c.bench_function("ayanamsa", |b| b.iter(|| engine.ayanamsa(black_box(jd))));

    let loc = Location::NEW_DELHI;
    c.bench_function("sunrise_jd", |b| {
        b.iter(|| engine.sunrise_jd(black_box(jd), black_box(&loc)))
    });
}

criterion_group!(benches, bench_engine);
criterion_main!(benches);
