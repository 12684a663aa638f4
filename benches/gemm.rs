//! Compares the naive matrix multiplication of `Matrix` against `matrixmultiply::sgemm` on the
//! shape of the first dense layer.

#[macro_use]
extern crate criterion;

mod shared;

use criterion::{black_box, Criterion};
use rusty_mlp::*;
use shared::*;

const SAMPLE_SIZE: usize = 100;
const NOISE_THRESHOLD: f64 = 0.06;

/// The first layer multiplies a 128x784 weight matrix with a 784x1 column.
const M: usize = 128;
const K: usize = 784;
const N: usize = 1;

fn bench_gemm_variants(c: &mut Criterion) {
    let a = black_box(create_random_matrix(MatrixDims::new(M, K)));
    let b = black_box(create_random_matrix(MatrixDims::new(K, N)));

    let mut group = c.benchmark_group("gemm 128x784 * 784x1");
    group.bench_function("naive", |bench| bench.iter(|| (&a * &b).unwrap()));
    group.bench_function("matrixmultiply", |bench| {
        let mut out = vec![0f32; M * N];
        bench.iter(|| unsafe {
            matrixmultiply::sgemm(
                M,
                K,
                N,
                1f32,
                a.as_slice().as_ptr(),
                K as isize,
                1,
                b.as_slice().as_ptr(),
                N as isize,
                1,
                0f32,
                out.as_mut_ptr(),
                N as isize,
                1,
            )
        })
    });
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(SAMPLE_SIZE).noise_threshold(NOISE_THRESHOLD);
    targets = bench_gemm_variants
}
criterion_main!(benches);
