use super::Matrix;
use crate::util::Coord;

impl Matrix {
    /// Returns the reduced row echelon form, computed with Gauss-Jordan elimination.
    ///
    /// Columns without a nonzero pivot at or below the current pivot row are skipped without
    /// advancing the pivot row. The original matrix is not modified.
    pub fn rref(&self) -> Matrix {
        let mut out = self.clone();
        let (rows, cols) = (out.rows, out.cols);
        let mut lead = 0;

        for row in 0..rows {
            if lead >= cols {
                break;
            }
            // Find a pivot for the lead column, moving right past all-zero columns
            let mut i = row;
            while *out.data.elem(cols, i, lead) == 0f32 {
                i += 1;
                if i == rows {
                    i = row;
                    lead += 1;
                    if lead == cols {
                        return out;
                    }
                }
            }
            if i != row {
                out.swap_rows(i, row);
            }

            let div = *out.data.elem(cols, row, lead);
            for x in out.data[row * cols..(row + 1) * cols].iter_mut() {
                *x /= div;
            }

            let pivot = out.row(row).to_vec();
            for r in (0..rows).filter(|&r| r != row) {
                let factor = *out.data.elem(cols, r, lead);
                for (x, p) in out.data[r * cols..(r + 1) * cols].iter_mut().zip(&pivot) {
                    *x -= factor * p;
                }
            }
            lead += 1;
        }
        out
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        for j in 0..self.cols {
            self.data.swap(a * self.cols + j, b * self.cols + j);
        }
    }
}
