/*
 * Trivial to understand utility functions that need not clutter other namespaces.
 */
use crate::error::Result;
use crate::matrix::{Matrix, MatrixDims};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

/// Row-major element addressing over a flat buffer.
pub trait Coord<T> {
    /// Returns the element at row `i`, column `j` of a buffer with `cols` columns.
    fn elem(&self, cols: usize, i: usize, j: usize) -> &T;
    fn elem_mut(&mut self, cols: usize, i: usize, j: usize) -> &mut T;
}

impl<T> Coord<T> for [T] {
    #[inline]
    fn elem(&self, cols: usize, i: usize, j: usize) -> &T {
        &self[i * cols + j]
    }
    #[inline]
    fn elem_mut(&mut self, cols: usize, i: usize, j: usize) -> &mut T {
        &mut self[i * cols + j]
    }
}

/// Reads a file of raw little-endian f32s into a freshly allocated matrix of shape `dims`.
///
/// Fails if the file is shorter than `dims` requires; trailing bytes are ignored.
pub fn read_matrix_from_file<P>(path: P, dims: MatrixDims) -> Result<Matrix>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    trace!("Read {} matrix from \"{}\".", dims, path.display());
    let mut reader = BufReader::new(File::open(path)?);
    let mut mtx = Matrix::with_dims(dims)?;
    mtx.read_from(&mut reader)?;
    Ok(mtx)
}

/// Writes the matrix into a file as raw little-endian f32s.
pub fn write_matrix_into_file<P>(path: P, mtx: &Matrix) -> Result<()>
where
    P: AsRef<Path>,
{
    let mut file = File::create(path)?;
    mtx.write_to(&mut file)?;
    Ok(())
}

/// Returns true if every element of `a` is within `margin` of the matching element of `b`.
pub fn is_within_margin(a: &[f32], b: &[f32], margin: f32) -> bool {
    if a.len() != b.len() {
        return false;
    }

    for (idx, item) in a.iter().enumerate() {
        if (b[idx] - item).abs() > margin {
            return false;
        }
    }
    true
}

/// Milliseconds elapsed between two instants.
pub fn duration_between(start: Instant, end: Instant) -> f64 {
    let duration = end.duration_since(start);
    duration.as_secs() as f64 * 1000f64 + f64::from(duration.subsec_nanos()) / 1_000_000f64
}
