use agglo::core::ClusteringEngine;
use agglo::data::ObservationMatrix;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ndarray::Array2;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_matrix(n: usize, m: usize) -> ObservationMatrix {
    let mut rng = StdRng::seed_from_u64(42);
    let data = Array2::from_shape_fn((n, m), |_| rng.gen_range(-10.0..10.0));
    ObservationMatrix::new(data).unwrap()
}

pub fn full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_run");
    for n in [25, 50, 100] {
        let data = random_matrix(n, 8);
        group.bench_with_input(BenchmarkId::from_parameter(n), &data, |b, data| {
            b.iter(|| ClusteringEngine::new(data.clone()).unwrap().run().unwrap())
        });
    }
    group.finish();
}

pub fn single_step(c: &mut Criterion) {
    let data = random_matrix(100, 8);
    c.bench_function("merge_step_100x8", |b| {
        b.iter(|| {
            let mut engine = ClusteringEngine::new(data.clone()).unwrap();
            engine.merge_step().unwrap()
        })
    });
}

criterion_group!(benches, full_run, single_step);
criterion_main!(benches);
