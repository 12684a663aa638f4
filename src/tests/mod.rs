
use super::*;
use lazy_static::lazy_static;
use rand::Rng;

pub const RESULT_MARGIN: f32 = 0.00002f32;

lazy_static! {
    static ref ZERO_NETWORK: MlpNetwork =
        MlpNetwork::from_weights(Weights::zeros().unwrap()).unwrap();
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn create_random_vec(len: usize) -> Vec<f32> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen_range(-1f32..1f32)).collect()
}

/// Weights drawn uniformly from [-1, 1), shaped as the network expects.
pub fn random_weights() -> Weights {
    let random = |dims: MatrixDims| {
        Matrix::from_vec(dims.rows, dims.cols, create_random_vec(dims.num_elems())).unwrap()
    };
    Weights {
        weights: MLP_TOPOLOGY.iter().map(|spec| random(spec.weights)).collect(),
        biases: MLP_TOPOLOGY.iter().map(|spec| random(spec.bias)).collect(),
    }
}
