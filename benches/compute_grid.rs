use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mandelzoom::{Complex, ComplexRect, ComputeStrategy, GridSpec};

fn bench_compute_grid(c: &mut Criterion) {
    let region = ComplexRect::new(
        Complex {
            real: -2.0,
            imag: -1.0,
        },
        Complex {
            real: 1.0,
            imag: 1.0,
        },
    )
    .unwrap();
    let spec = GridSpec::new(320, 240, 100, 2).unwrap();

    let mut group = c.benchmark_group("compute_grid");
    for strategy in [ComputeStrategy::Serial, ComputeStrategy::Parallel] {
        group.bench_with_input(
            BenchmarkId::from_parameter(strategy.display_name()),
            &strategy,
            |b, strategy| {
                b.iter(|| strategy.compute(&region, &spec).unwrap());
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_compute_grid);
criterion_main!(benches);
