use crate::matrix::MatrixDims;
use std::io;
use thiserror::Error;

/// Every way a matrix operation, a layer or the network can fail.
#[derive(Debug, Error)]
pub enum Error {
    /// Operand shapes are incompatible, a dimension is zero or the topology does not match.
    #[error("dimension error in {op}: {detail}")]
    Dimension { op: &'static str, detail: String },
    /// Element access at (row, col) outside of the matrix.
    #[error("index ({row}, {col}) out of bounds for a {dims} matrix")]
    Index {
        row: usize,
        col: usize,
        dims: MatrixDims,
    },
    /// Linear element access past the end of the buffer.
    #[error("linear index {index} out of bounds for {len} elements")]
    LinearIndex { index: usize, len: usize },
    /// The byte stream held fewer bytes than the matrix needs.
    #[error("expected {expected} bytes, but the stream ended after {actual}")]
    Format { expected: usize, actual: usize },
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn mismatch(op: &'static str, expected: MatrixDims, actual: MatrixDims) -> Error {
        Error::Dimension {
            op,
            detail: format!("expected {}, got {}", expected, actual),
        }
    }

    pub(crate) fn zero_dims(op: &'static str, rows: usize, cols: usize) -> Error {
        Error::Dimension {
            op,
            detail: format!("{}x{} has a zero dimension", rows, cols),
        }
    }

    pub(crate) fn too_large(op: &'static str, rows: usize, cols: usize) -> Error {
        Error::Dimension {
            op,
            detail: format!("{}x{} elements do not fit in memory", rows, cols),
        }
    }

    pub fn is_dimension(&self) -> bool {
        match self {
            Error::Dimension { .. } => true,
            _ => false,
        }
    }

    pub fn is_index(&self) -> bool {
        match self {
            Error::Index { .. } | Error::LinearIndex { .. } => true,
            _ => false,
        }
    }

    pub fn is_format(&self) -> bool {
        match self {
            Error::Format { .. } => true,
            _ => false,
        }
    }
}
