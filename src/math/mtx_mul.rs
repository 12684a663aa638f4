use crate::util::Coord;
use num_traits::{NumAssign, Zero};

/// Naive matrix multiplication of `a` (m × n) by `b` (n × k) into a new m × k buffer.
pub fn mtx_mul<T>(a: &[T], b: &[T], m_dim: usize, n_dim: usize, k_dim: usize) -> Vec<T>
where
    T: NumAssign + Zero + Copy,
{
    debug_assert_eq!(a.len(), m_dim * n_dim);
    debug_assert_eq!(b.len(), n_dim * k_dim);

    let mut c_mul = vec![Zero::zero(); m_dim * k_dim];
    for i in 0..m_dim {
        for j in 0..k_dim {
            for z in 0..n_dim {
                *c_mul.elem_mut(k_dim, i, j) += *a.elem(n_dim, i, z) * *b.elem(k_dim, z, j);
            }
        }
    }
    c_mul
}
