//! Activation functions applied after the affine part of a dense layer.
use crate::math;
use crate::matrix::Matrix;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Element-wise `max(x, 0)`.
    Relu,
    /// Normalizes the whole matrix into a probability distribution.
    Softmax,
}

impl Activation {
    /// Applies the activation, returning a new matrix of the same shape.
    pub fn apply(self, x: &Matrix) -> Matrix {
        let data = match self {
            Activation::Relu => math::relu(x.as_slice()),
            Activation::Softmax => math::softmax(x.as_slice()),
        };
        x.with_data(data)
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Activation::Relu => "relu",
            Activation::Softmax => "softmax",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::Rng;

    #[test]
    fn relu_is_max_with_zero() {
        let mut rng = rand::thread_rng();
        let data = (0..64).map(|_| rng.gen_range(-5f32..5f32)).collect::<Vec<f32>>();
        let x = Matrix::from_vec(8, 8, data).unwrap();
        let y = Activation::Relu.apply(&x);
        assert_eq!(y.dims(), x.dims());
        for k in 0..x.num_elems() {
            assert_eq!(y.at(k).unwrap(), x.at(k).unwrap().max(0f32));
        }
    }

    #[test]
    fn softmax_sums_to_one() {
        let mut rng = rand::thread_rng();
        for _ in 0..10 {
            let data = (0..10).map(|_| rng.gen_range(-20f32..20f32)).collect::<Vec<f32>>();
            let y = Activation::Softmax.apply(&Matrix::from_vec(10, 1, data).unwrap());
            assert!((y.sum() - 1f32).abs() < 1e-5);
            assert!(y.as_slice().iter().all(|&p| p >= 0f32 && p <= 1f32));
        }
    }

    #[test]
    fn softmax_keeps_the_order_of_its_inputs() {
        let x = Matrix::from_vec(3, 1, vec![1f32, 3f32, 2f32]).unwrap();
        let y = Activation::Softmax.apply(&x);
        assert_eq!(y.argmax(), 1);
        assert!(y.at(2).unwrap() > y.at(0).unwrap());
    }
}
