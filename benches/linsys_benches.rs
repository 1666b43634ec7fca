#![allow(non_snake_case)]
use RustedLinSys::somelinalg::LUsolver::lu_factorization;
use RustedLinSys::somelinalg::gauss_elimination::{gauss_elimination, gauss_jordan_elimination};
use RustedLinSys::somelinalg::iterative_solvers_cpu::{gauss_seidel, jacobi};
use RustedLinSys::somelinalg::solver_config::SolverConfig;
use criterion::{Criterion, criterion_group, criterion_main};
use nalgebra::{DMatrix, DVector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

/// random strictly diagonally dominant system, so that every method converges
fn dominant_system(n: usize) -> (DMatrix<f64>, DVector<f64>) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut A = DMatrix::from_fn(n, n, |_, _| rng.random_range(-1.0..1.0));
    for i in 0..n {
        A[(i, i)] = n as f64 + rng.random_range(1.0..2.0);
    }
    let b = DVector::from_fn(n, |_, _| rng.random_range(-10.0..10.0));
    (A, b)
}

fn bench_methods(c: &mut Criterion) {
    let n = 100;
    let (A, b) = dominant_system(n);
    let config = SolverConfig::default();
    let mut group = c.benchmark_group("dense 100x100");
    group.bench_function("Jacobi", |bench| {
        bench.iter(|| {
            let mut x = DVector::zeros(n);
            jacobi(black_box(&A), black_box(&b), &mut x, &config)
        })
    });
    group.bench_function("Gauss-Seidel", |bench| {
        bench.iter(|| {
            let mut x = DVector::zeros(n);
            gauss_seidel(black_box(&A), black_box(&b), &mut x, &config)
        })
    });
    group.bench_function("Gauss elimination", |bench| {
        bench.iter(|| gauss_elimination(black_box(&A), black_box(&b)))
    });
    group.bench_function("Gauss-Jordan", |bench| {
        bench.iter(|| gauss_jordan_elimination(black_box(&A), black_box(&b)))
    });
    group.bench_function("LU", |bench| {
        bench.iter(|| lu_factorization(black_box(&A), b.clone()))
    });
    group.finish();
}

criterion_group!(benches, bench_methods);
criterion_main!(benches);
