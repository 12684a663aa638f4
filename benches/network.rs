#[macro_use]
extern crate criterion;
#[macro_use]
extern crate lazy_static;

mod shared;

use criterion::{black_box, Criterion};
use rusty_mlp::*;
use shared::*;

const SAMPLE_SIZE: usize = 100;
const NOISE_THRESHOLD: f64 = 0.05;

lazy_static! {
    static ref NETWORK: MlpNetwork = MlpNetwork::from_weights(create_random_weights()).unwrap();
}

/// Benchmark the full forward pass.
fn bench_forward_pass(c: &mut Criterion) {
    let input = black_box(create_random_matrix(MatrixDims::new(IMG_DIMS.num_elems(), 1)));
    c.bench_function("mlp forward pass", move |b| {
        b.iter(|| NETWORK.classify(&input).unwrap())
    });
}

/// Benchmark each layer separately.
fn bench_per_layer(c: &mut Criterion) {
    let mut input = black_box(create_random_matrix(MatrixDims::new(IMG_DIMS.num_elems(), 1)));
    let mut group = c.benchmark_group("mlp layers");
    for (idx, layer) in NETWORK.layers().iter().enumerate() {
        let layer_input = input.clone();
        group.bench_function(format!("layer {} ({})", idx + 1, layer.activation()), |b| {
            b.iter(|| layer.apply(&layer_input).unwrap())
        });
        input = layer.apply(&input).unwrap();
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(SAMPLE_SIZE).noise_threshold(NOISE_THRESHOLD);
    targets = bench_forward_pass, bench_per_layer
}
criterion_main!(benches);
