#![allow(dead_code)]

use rand::Rng;
use rusty_mlp::*;

pub fn create_random_vec(len: usize) -> Vec<f32> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen_range(-1f32..1f32)).collect()
}

pub fn create_random_matrix(dims: MatrixDims) -> Matrix {
    Matrix::from_vec(dims.rows, dims.cols, create_random_vec(dims.num_elems())).unwrap()
}

/// Weights drawn uniformly from [-1, 1), shaped as the network expects.
pub fn create_random_weights() -> Weights {
    Weights {
        weights: MLP_TOPOLOGY
            .iter()
            .map(|spec| create_random_matrix(spec.weights))
            .collect(),
        biases: MLP_TOPOLOGY
            .iter()
            .map(|spec| create_random_matrix(spec.bias))
            .collect(),
    }
}
