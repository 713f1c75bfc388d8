use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use solarfield::planetlib::{heliocentric_position, true_anomaly, Body, Ephemeris};
use solarfield::time::Epoch;

fn bench_compute(c: &mut Criterion) {
    let ephemeris = Ephemeris::default();
    let epoch = Epoch::from_days(8864.25);

    c.bench_function("ephemeris/compute_epoch", |b| {
        b.iter(|| ephemeris.compute_epoch(black_box(epoch)))
    });

    c.bench_function("ephemeris/body_state_mars", |b| {
        b.iter(|| ephemeris.body_state(black_box(Body::Mars), black_box(epoch)))
    });
}

fn bench_stages(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let anomalies: Vec<f64> = (0..1_000)
        .map(|_| rng.gen_range(-std::f64::consts::PI..std::f64::consts::PI))
        .collect();

    c.bench_function("kepler/true_anomaly_x1000", |b| {
        b.iter(|| {
            anomalies
                .iter()
                .map(|&m| true_anomaly(black_box(m), 0.2488))
                .sum::<f64>()
        })
    });

    let pluto = Body::Pluto.elements_at(0.25);
    c.bench_function("heliocentric/pluto", |b| {
        b.iter(|| heliocentric_position(black_box(Body::Pluto), black_box(&pluto)))
    });
}

criterion_group!(benches, bench_compute, bench_stages);
criterion_main!(benches);
