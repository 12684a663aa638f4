//! A dense, row-major matrix of `f32`s.
mod io;
mod ops;
mod rref;

use crate::error::{Error, Result};
use crate::math;
use crate::util::Coord;
use itertools::Itertools;
use std::fmt;
use std::mem;

/// Elements above this render as a filled cell in the silhouette.
pub const RENDER_THRESHOLD: f32 = 0.1;

/// A descriptor for the shape of a matrix
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MatrixDims {
    pub rows: usize,
    pub cols: usize,
}

impl MatrixDims {
    pub const fn new(rows: usize, cols: usize) -> MatrixDims {
        MatrixDims { rows, cols }
    }
    pub fn num_elems(&self) -> usize {
        self.rows * self.cols
    }
}

impl fmt::Display for MatrixDims {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// A matrix that exclusively owns its row-major buffer.
///
/// Element (i, j) lives at offset `i * cols + j`. Both dimensions are always positive and the
/// buffer always holds exactly `rows * cols` elements. `Clone` makes a deep copy.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl Default for Matrix {
    /// A 1x1 zero matrix.
    fn default() -> Matrix {
        Matrix {
            rows: 1,
            cols: 1,
            data: vec![0f32],
        }
    }
}

/// Number of elements of a `rows` x `cols` buffer. Rejects zero dimensions and buffers whose
/// size in bytes overflows `isize`.
fn checked_len(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(Error::zero_dims("construction", rows, cols));
    }
    rows.checked_mul(cols)
        .filter(|len| {
            len.checked_mul(mem::size_of::<f32>())
                .map_or(false, |bytes| bytes <= isize::MAX as usize)
        })
        .ok_or_else(|| Error::too_large("construction", rows, cols))
}

impl Matrix {
    /// Creates a zero-filled `rows` x `cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Result<Matrix> {
        let len = checked_len(rows, cols)?;
        Ok(Matrix {
            rows,
            cols,
            data: vec![0f32; len],
        })
    }

    pub fn with_dims(dims: MatrixDims) -> Result<Matrix> {
        Matrix::new(dims.rows, dims.cols)
    }

    /// Creates a matrix from row-major `data`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f32>) -> Result<Matrix> {
        let len = checked_len(rows, cols)?;
        if data.len() != len {
            return Err(Error::Dimension {
                op: "construction",
                detail: format!("{}x{} needs {} elements, got {}", rows, cols, len, data.len()),
            });
        }
        Ok(Matrix { rows, cols, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn dims(&self) -> MatrixDims {
        MatrixDims::new(self.rows, self.cols)
    }
    pub fn num_elems(&self) -> usize {
        self.data.len()
    }
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Reads the element at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> Result<f32> {
        self.check_coord(i, j)?;
        Ok(*self.data.elem(self.cols, i, j))
    }

    pub fn get_mut(&mut self, i: usize, j: usize) -> Result<&mut f32> {
        self.check_coord(i, j)?;
        Ok(self.data.elem_mut(self.cols, i, j))
    }

    /// Reads the element at linear (row-major) index `k`.
    pub fn at(&self, k: usize) -> Result<f32> {
        self.check_linear(k)?;
        Ok(self.data[k])
    }

    pub fn at_mut(&mut self, k: usize) -> Result<&mut f32> {
        self.check_linear(k)?;
        Ok(&mut self.data[k])
    }

    fn check_coord(&self, i: usize, j: usize) -> Result<()> {
        if i >= self.rows || j >= self.cols {
            return Err(Error::Index {
                row: i,
                col: j,
                dims: self.dims(),
            });
        }
        Ok(())
    }

    fn check_linear(&self, k: usize) -> Result<()> {
        if k >= self.data.len() {
            return Err(Error::LinearIndex {
                index: k,
                len: self.data.len(),
            });
        }
        Ok(())
    }

    /// Transposes the matrix in place.
    pub fn transpose(&mut self) -> &mut Self {
        let mut t_data = vec![0f32; self.data.len()];
        for i in 0..self.rows {
            for j in 0..self.cols {
                // The transposed buffer has `rows` columns
                *t_data.elem_mut(self.rows, j, i) = *self.data.elem(self.cols, i, j);
            }
        }
        mem::swap(&mut self.rows, &mut self.cols);
        self.data = t_data;
        self
    }

    /// Reshapes the matrix into a single column, keeping the element order.
    pub fn vectorize(&mut self) -> &mut Self {
        self.rows *= self.cols;
        self.cols = 1;
        self
    }

    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }

    /// The Frobenius norm.
    pub fn norm(&self) -> f32 {
        self.data.iter().map(|x| x * x).sum::<f32>().sqrt()
    }

    /// Linear index of the largest element. Ties resolve to the lowest index.
    pub fn argmax(&self) -> usize {
        math::argmax(&self.data)
    }

    /// Returns an adapter that renders the numeric values, one row per line.
    pub fn plain(&self) -> Plain {
        Plain(self)
    }

    /// A matrix of the same shape holding `data`, which must have as many elements.
    pub(crate) fn with_data(&self, data: Vec<f32>) -> Matrix {
        debug_assert_eq!(data.len(), self.data.len());
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        }
    }

    pub(crate) fn row(&self, i: usize) -> &[f32] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }
}

/// Renders a coarse silhouette: `**` for elements above [`RENDER_THRESHOLD`], blanks otherwise.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for i in 0..self.rows {
            for &x in self.row(i) {
                if x > RENDER_THRESHOLD {
                    write!(f, "**")?;
                } else {
                    write!(f, "  ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Numeric rendering of a [`Matrix`], see [`Matrix::plain`].
pub struct Plain<'a>(&'a Matrix);

impl<'a> fmt::Display for Plain<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for i in 0..self.0.rows {
            writeln!(f, "{}", self.0.row(i).iter().join(" "))?;
        }
        Ok(())
    }
}
