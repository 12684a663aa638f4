mod weights;

pub use self::weights::*;
use crate::activation::Activation;
use crate::error::{Error, Result};
use crate::layers::{Dense, Layer};
use crate::matrix::{Matrix, MatrixDims};
use std::fmt;

/// Shape of the input image before it is flattened into a column.
pub const IMG_DIMS: MatrixDims = MatrixDims::new(28, 28);
/// The number of layers in the network.
pub const MLP_SIZE: usize = 4;

/// Shapes and activation of a single fully-connected layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayerSpec {
    pub weights: MatrixDims,
    pub bias: MatrixDims,
    pub activation: Activation,
}

impl LayerSpec {
    const fn new(out_dim: usize, in_dim: usize, activation: Activation) -> LayerSpec {
        LayerSpec {
            weights: MatrixDims::new(out_dim, in_dim),
            bias: MatrixDims::new(out_dim, 1),
            activation,
        }
    }
}

/// The fixed topology every `MlpNetwork` is validated against.
pub const MLP_TOPOLOGY: [LayerSpec; MLP_SIZE] = [
    LayerSpec::new(128, 784, Activation::Relu),
    LayerSpec::new(64, 128, Activation::Relu),
    LayerSpec::new(20, 64, Activation::Relu),
    LayerSpec::new(10, 20, Activation::Softmax),
];

/// A digit identified by the network with the associated probability.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Digit {
    pub value: u32,
    pub probability: f32,
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} at probability: {:.4}", self.value, self.probability)
    }
}

pub trait Predict {
    /// Runs the forward pass, returning the output of the last layer.
    fn predict(&self, input: &Matrix) -> Result<Matrix>;
}

/// A four-layer perceptron classifying flattened 28x28 images into ten digits.
///
/// The network is immutable once built, so one instance can serve any number of threads.
#[derive(Clone, Debug)]
pub struct MlpNetwork {
    layers: Vec<Dense>,
}

impl MlpNetwork {
    /// Assembles the network from per-layer weights and biases shaped as in [`MLP_TOPOLOGY`].
    pub fn new(weights: Vec<Matrix>, biases: Vec<Matrix>) -> Result<MlpNetwork> {
        verify_count("weight matrices", weights.len())?;
        verify_count("bias matrices", biases.len())?;

        let mut layers = Vec::with_capacity(MLP_SIZE);
        for (idx, ((w, b), spec)) in weights
            .into_iter()
            .zip(biases)
            .zip(MLP_TOPOLOGY.iter())
            .enumerate()
        {
            verify_shape(idx, "weights", spec.weights, w.dims())?;
            verify_shape(idx, "bias", spec.bias, b.dims())?;
            layers.push(Dense::new(w, b, spec.activation)?);
        }

        {
            let layer_refs = layers.iter().map(|l| l as &dyn Layer).collect::<Vec<_>>();
            verify_network_dimensions(&layer_refs)?;
        }
        debug!("Created a {}-layer network.", layers.len());

        Ok(MlpNetwork { layers })
    }

    pub fn from_weights(weights: Weights) -> Result<MlpNetwork> {
        MlpNetwork::new(weights.weights, weights.biases)
    }

    pub fn layers(&self) -> &[Dense] {
        &self.layers
    }

    /// Classifies a flattened 784x1 image, returning the most probable digit.
    ///
    /// Ties between equally probable digits resolve to the lowest digit.
    pub fn classify(&self, img: &Matrix) -> Result<Digit> {
        let output = self.predict(img)?;
        let max_idx = output.argmax();
        Ok(Digit {
            value: max_idx as u32,
            probability: output.at(max_idx)?,
        })
    }
}

impl Predict for MlpNetwork {
    fn predict(&self, input: &Matrix) -> Result<Matrix> {
        let mut output = input.clone();
        for (idx, layer) in self.layers.iter().enumerate() {
            trace!("Run layer {} ({}).", idx + 1, layer.activation());
            output = layer.apply(&output)?;
        }
        Ok(output)
    }
}

/// Verifies that the I/O dimensions of consecutive layers match.
pub fn verify_network_dimensions(layers: &[&dyn Layer]) -> Result<()> {
    for (idx, pair) in layers.windows(2).enumerate() {
        let (prev, next) = (pair[0], pair[1]);
        if prev.num_out() != next.num_in() {
            return Err(Error::Dimension {
                op: "network construction",
                detail: format!(
                    "{} layer {} outputs {} elements, but {} layer {} takes {}",
                    prev.name(),
                    idx + 1,
                    prev.num_out(),
                    next.name(),
                    idx + 2,
                    next.num_in()
                ),
            });
        }
    }
    Ok(())
}

fn verify_count(what: &str, actual: usize) -> Result<()> {
    if actual != MLP_SIZE {
        return Err(Error::Dimension {
            op: "network construction",
            detail: format!("expected {} {}, got {}", MLP_SIZE, what, actual),
        });
    }
    Ok(())
}

fn verify_shape(idx: usize, what: &str, expected: MatrixDims, actual: MatrixDims) -> Result<()> {
    if expected != actual {
        return Err(Error::Dimension {
            op: "network construction",
            detail: format!(
                "layer {} {}: expected {}, got {}",
                idx + 1,
                what,
                expected,
                actual
            ),
        });
    }
    Ok(())
}
