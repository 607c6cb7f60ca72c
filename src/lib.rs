#![cfg_attr(not(any(feature = "std", test)), no_std)]

extern crate alloc;

pub mod error;
pub mod matrix;
pub mod norm;
pub mod types;

pub use error::MatrixError;
pub use norm::{column_norms, column_norms_into, column_norms_squared};
pub use types::{Matrix, NormVector};

/// Column-wise L2 norms of `matrix`: `out[j] = sqrt(sum_i matrix[(i, j)]^2)`.
pub fn compute(matrix: &Matrix) -> NormVector {
    column_norms(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute() {
        let m = matrix::from_rows(&[vec![3., -1.], vec![4., 0.]]).unwrap();
        assert_eq!(compute(&m), vec![5., 1.]);
        assert_eq!(compute(&matrix::zeros(0, 2)), vec![0., 0.]);
        assert!(compute(&matrix::zeros(7, 0)).is_empty());
    }
}
