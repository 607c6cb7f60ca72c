use alloc::vec::Vec;

use nalgebra::{Dim, Matrix, Scalar, Storage};
use num_traits::Float;

use crate::error::MatrixError;

// Plain left-to-right accumulation, no compensation.
fn sum_of_squares<'a, T: Float + 'a>(values: impl Iterator<Item = &'a T>) -> T {
    values.fold(T::zero(), |sum, &v| sum + v * v)
}

fn column_sums<'m, T, R, C, S>(matrix: &'m Matrix<T, R, C, S>) -> impl Iterator<Item = T> + 'm
where
    T: Scalar + Float,
    R: Dim,
    C: Dim,
    S: Storage<T, R, C>,
{
    log::trace!(target: "colnorm", "column norms of {}x{} matrix", matrix.nrows(), matrix.ncols());
    (0..matrix.ncols()).map(move |j| sum_of_squares(matrix.column(j).iter()))
}

pub fn column_norms_squared<T, R, C, S>(matrix: &Matrix<T, R, C, S>) -> Vec<T>
where
    T: Scalar + Float,
    R: Dim,
    C: Dim,
    S: Storage<T, R, C>,
{
    column_sums(matrix).collect()
}

/// L2 norm of every column of `matrix`, index-aligned with its columns.
///
/// Never fails: a matrix without rows gives all zeros, a matrix without
/// columns gives an empty vector, and NaN or infinite entries propagate
/// into the norm of their column.
pub fn column_norms<T, R, C, S>(matrix: &Matrix<T, R, C, S>) -> Vec<T>
where
    T: Scalar + Float,
    R: Dim,
    C: Dim,
    S: Storage<T, R, C>,
{
    column_sums(matrix).map(<T as Float>::sqrt).collect()
}

/// Same as [`column_norms`], writing into `out`. Every slot is overwritten.
pub fn column_norms_into<T, R, C, S>(matrix: &Matrix<T, R, C, S>, out: &mut [T]) -> Result<(), MatrixError>
where
    T: Scalar + Float,
    R: Dim,
    C: Dim,
    S: Storage<T, R, C>,
{
    if out.len() != matrix.ncols() {
        return Err(MatrixError::OutputLength {
            expected: matrix.ncols(),
            found: out.len(),
        });
    }

    for (slot, sum) in out.iter_mut().zip(column_sums(matrix)) {
        *slot = sum.sqrt();
    }
    Ok(())
}
