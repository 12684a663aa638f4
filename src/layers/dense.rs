use super::Layer;
use crate::activation::Activation;
use crate::error::{Error, Result};
use crate::matrix::{Matrix, MatrixDims};

/// A fully-connected layer computing `activation(weights * x + bias)`.
#[derive(Clone, Debug)]
pub struct Dense {
    weights: Matrix,
    bias: Matrix,
    activation: Activation,
}

impl Dense {
    /// Creates a fully-connected layer. Weights have shape (out, in) and bias (out, 1).
    pub fn new(weights: Matrix, bias: Matrix, activation: Activation) -> Result<Dense> {
        let expected_bias = MatrixDims::new(weights.rows(), 1);
        if bias.dims() != expected_bias {
            return Err(Error::mismatch("dense bias", expected_bias, bias.dims()));
        }
        debug!(
            "Create dense-layer with input-size: {}, output-size: {}, activation: {}.",
            weights.cols(),
            weights.rows(),
            activation
        );
        trace!(
            "\t↳ input: {0}, output: {1}, weights-size: {1}x{0} = {2}.",
            weights.cols(),
            weights.rows(),
            weights.num_elems()
        );
        Ok(Dense {
            weights,
            bias,
            activation,
        })
    }

    pub fn weights(&self) -> &Matrix {
        &self.weights
    }
    pub fn bias(&self) -> &Matrix {
        &self.bias
    }
    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Applies the layer to a column vector `x` with as many rows as the weights have columns.
    pub fn apply(&self, x: &Matrix) -> Result<Matrix> {
        let z = ((&self.weights * x)? + &self.bias)?;
        Ok(self.activation.apply(&z))
    }
}

impl Layer for Dense {
    fn num_in(&self) -> usize {
        self.weights.cols()
    }
    fn num_out(&self) -> usize {
        self.weights.rows()
    }
    fn name(&self) -> &'static str {
        "dense"
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn layer(activation: Activation) -> Dense {
        // 2 outputs, 3 inputs
        let weights =
            Matrix::from_vec(2, 3, vec![1f32, 0f32, -1f32, 0.5f32, 0.5f32, 0.5f32]).unwrap();
        let bias = Matrix::from_vec(2, 1, vec![0f32, -4f32]).unwrap();
        Dense::new(weights, bias, activation).unwrap()
    }

    #[test]
    fn computes_affine_then_activation() {
        let x = Matrix::from_vec(3, 1, vec![1f32, 2f32, 3f32]).unwrap();
        let out = layer(Activation::Relu).apply(&x).unwrap();
        // [1 - 3 + 0, 3 - 4] = [-2, -1] -> relu
        assert_eq!(out.as_slice(), &[0f32, 0f32]);

        let x = Matrix::from_vec(3, 1, vec![4f32, 6f32, 2f32]).unwrap();
        let out = layer(Activation::Relu).apply(&x).unwrap();
        assert_eq!(out.as_slice(), &[2f32, 2f32]);
    }

    #[test]
    fn does_not_modify_its_input() {
        let x = Matrix::from_vec(3, 1, vec![1f32, 2f32, 3f32]).unwrap();
        let dense = layer(Activation::Softmax);
        let out = dense.apply(&x).unwrap();
        assert_eq!(x.as_slice(), &[1f32, 2f32, 3f32]);
        assert!((out.sum() - 1f32).abs() < 1e-6);
        assert_eq!(dense.weights().at(0).unwrap(), 1f32);
    }

    #[test]
    fn rejects_mismatched_input() {
        let x = Matrix::new(4, 1).unwrap();
        assert!(layer(Activation::Relu).apply(&x).unwrap_err().is_dimension());
    }

    #[test]
    fn rejects_mismatched_bias() {
        let weights = Matrix::new(2, 3).unwrap();
        let bias = Matrix::new(3, 1).unwrap();
        assert!(Dense::new(weights, bias, Activation::Relu)
            .unwrap_err()
            .is_dimension());
    }

    #[test]
    fn reports_its_shape() {
        let dense = layer(Activation::Relu);
        assert_eq!(dense.num_in(), 3);
        assert_eq!(dense.num_out(), 2);
        assert_eq!(dense.activation(), Activation::Relu);
        assert_eq!(dense.bias().dims(), MatrixDims::new(2, 1));
        assert_eq!(dense.bias().as_slice(), &[0f32, -4f32]);
    }
}
