use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use marquee_core::CubicBezier;

fn bench_solve(c: &mut Criterion) {
    let curves = [
        ("ease", CubicBezier::new(0.25, 0.1, 0.25, 1.0)),
        ("ease_in_out", CubicBezier::new(0.42, 0.0, 0.58, 1.0)),
        // Overshoot curve exercising the bisection fallback.
        ("overshoot", CubicBezier::new(0.5, 2.0, 0.5, 2.0)),
    ];
    let mut group = c.benchmark_group("cubic_bezier_solve");
    for (name, curve) in curves {
        group.bench_with_input(BenchmarkId::from_parameter(name), &curve, |b, curve| {
            b.iter(|| {
                let mut acc = 0.0f64;
                for i in 0..=1000 {
                    acc += curve.solve(black_box(i as f64 / 1000.0));
                }
                black_box(acc)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
