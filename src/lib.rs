//! A dense-matrix algebra library and a fixed four-layer perceptron that classifies 28x28
//! images of handwritten digits with externally supplied weights.
extern crate byteorder;
#[macro_use]
extern crate log;

pub mod activation;
pub mod error;
pub mod input;
pub mod layers;
pub mod math;
pub mod matrix;
pub mod network;
mod util;
#[cfg(test)]
mod tests;

pub use crate::activation::Activation;
pub use crate::error::{Error, Result};
pub use crate::layers::*;
pub use crate::matrix::{Matrix, MatrixDims};
pub use crate::network::*;
pub use crate::util::*;
use std::path::Path;

pub const WEIGHTS_DIR: &str = "input/weights";
pub const INPUT_IMG_DIR: &str = "input/images";

/// Creates the network with the weights found in `weights_dir`.
pub fn create_network<P>(weights_dir: P) -> Result<MlpNetwork>
where
    P: AsRef<Path>,
{
    let weights = Weights::from_dir(weights_dir)?;
    MlpNetwork::from_weights(weights)
}

/// Flattens a 28x28 image into a column and classifies it.
pub fn classify_image(net: &MlpNetwork, mut img: Matrix) -> Result<Digit> {
    img.vectorize();
    net.classify(&img)
}
