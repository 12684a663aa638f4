//! Element-wise and linear-algebra operators.
//!
//! Operators that can fail on a shape mismatch (`+`, matrix `*`) yield a `Result<Matrix>`.
//! Scaling by a scalar always succeeds and yields a plain `Matrix`.
use super::Matrix;
use crate::error::{Error, Result};
use crate::math::mtx_mul;
use itertools::Itertools;
use std::ops::{Add, Mul};

impl Matrix {
    fn ensure_same_dims(&self, other: &Matrix, op: &'static str) -> Result<()> {
        if self.dims() != other.dims() {
            return Err(Error::mismatch(op, self.dims(), other.dims()));
        }
        Ok(())
    }

    /// Element-wise (Hadamard) product.
    pub fn dot(&self, other: &Matrix) -> Result<Matrix> {
        self.ensure_same_dims(other, "hadamard product")?;
        let data = self
            .data
            .iter()
            .zip_eq(other.data.iter())
            .map(|(a, b)| a * b)
            .collect();
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        })
    }

    /// Adds `other` into this matrix element-wise, the checked form of `+=`.
    pub fn add_assign_checked(&mut self, other: &Matrix) -> Result<&mut Self> {
        self.ensure_same_dims(other, "addition")?;
        for (a, b) in self.data.iter_mut().zip_eq(other.data.iter()) {
            *a += b;
        }
        Ok(self)
    }

    /// Standard matrix product of `self` (m x k) and `other` (k x n).
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(Error::Dimension {
                op: "multiplication",
                detail: format!(
                    "cannot multiply {} by {}, inner dimensions differ",
                    self.dims(),
                    other.dims()
                ),
            });
        }
        Ok(Matrix {
            rows: self.rows,
            cols: other.cols,
            data: mtx_mul(&self.data, &other.data, self.rows, self.cols, other.cols),
        })
    }

    /// Multiplies every element by `c`.
    pub fn scale(&self, c: f32) -> Matrix {
        let mut res = self.clone();
        res.data.iter_mut().for_each(|x| *x *= c);
        res
    }
}

impl<'a, 'b> Add<&'b Matrix> for &'a Matrix {
    type Output = Result<Matrix>;

    fn add(self, other: &'b Matrix) -> Result<Matrix> {
        let mut new_mat = self.clone();
        new_mat.add_assign_checked(other)?;
        Ok(new_mat)
    }
}

impl<'a> Add<&'a Matrix> for Matrix {
    type Output = Result<Matrix>;

    fn add(mut self, other: &'a Matrix) -> Result<Matrix> {
        self.add_assign_checked(other)?;
        Ok(self)
    }
}

impl<'a, 'b> Mul<&'b Matrix> for &'a Matrix {
    type Output = Result<Matrix>;

    fn mul(self, other: &'b Matrix) -> Result<Matrix> {
        self.matmul(other)
    }
}

impl<'a> Mul<f32> for &'a Matrix {
    type Output = Matrix;

    fn mul(self, c: f32) -> Matrix {
        self.scale(c)
    }
}

impl Mul<f32> for Matrix {
    type Output = Matrix;

    fn mul(mut self, c: f32) -> Matrix {
        self.data.iter_mut().for_each(|x| *x *= c);
        self
    }
}

impl<'a> Mul<&'a Matrix> for f32 {
    type Output = Matrix;

    fn mul(self, m: &'a Matrix) -> Matrix {
        m.scale(self)
    }
}

impl Mul<Matrix> for f32 {
    type Output = Matrix;

    fn mul(self, m: Matrix) -> Matrix {
        m * self
    }
}
