use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nm_core::Settings;
use nm_math::distributions::{Gaussian, StudentT, Tail};
use nm_math::integrals::{Integrator, SimpsonRule};

fn bench_simpson(c: &mut Criterion) {
    let settings = Settings::default();

    c.bench_function("simpson_1000_exp", |b| {
        let rule = SimpsonRule::new(1000);
        b.iter(|| rule.integrate(|x| (-x * x).exp(), black_box(-3.0), black_box(3.0)))
    });

    c.bench_function("gaussian_probability", |b| {
        let g = Gaussian::standard();
        b.iter(|| g.probability(black_box(1.0), Tail::Upper, &settings))
    });

    c.bench_function("student_t_cdf_m11", |b| {
        let t = StudentT::new(11).unwrap();
        b.iter(|| t.cdf(black_box(-1.8), &settings))
    });
}

criterion_group!(benches, bench_simpson);
criterion_main!(benches);
