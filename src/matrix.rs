use alloc::vec::Vec;

use crate::error::MatrixError;
use crate::types::Matrix;

fn check_len(nrows: usize, ncols: usize, len: usize) -> Result<(), MatrixError> {
    let Some(expected) = nrows.checked_mul(ncols) else {
        log::debug!(target: "colnorm", "rejected {}x{} matrix: size overflow", nrows, ncols);
        return Err(MatrixError::DimensionOverflow { nrows, ncols });
    };
    if expected != len {
        log::debug!(
            target: "colnorm",
            "rejected {}x{} matrix: got {} values", nrows, ncols, len
        );
        return Err(MatrixError::LengthMismatch { nrows, ncols, len });
    }
    Ok(())
}

/// Builds a matrix from a slice of rows. All rows must share the first row's length.
pub fn from_rows(rows: &[Vec<f64>]) -> Result<Matrix, MatrixError> {
    let nrows = rows.len();
    let ncols = rows.first().map_or(0, |r| r.len());

    let mut data = Vec::with_capacity(rows.iter().map(Vec::len).sum());
    for (i, row) in rows.iter().enumerate() {
        if row.len() != ncols {
            log::debug!(
                target: "colnorm",
                "rejected ragged input at row {}: {} != {}", i, row.len(), ncols
            );
            return Err(MatrixError::RaggedRows {
                row: i,
                expected: ncols,
                found: row.len(),
            });
        }
        data.extend_from_slice(row);
    }
    Ok(Matrix::from_row_slice(nrows, ncols, &data))
}

pub fn from_column_major(nrows: usize, ncols: usize, data: &[f64]) -> Result<Matrix, MatrixError> {
    check_len(nrows, ncols, data.len())?;
    if data.is_empty() {
        return Ok(Matrix::zeros(nrows, ncols));
    }
    Ok(Matrix::from_column_slice(nrows, ncols, data))
}

pub fn from_row_major(nrows: usize, ncols: usize, data: &[f64]) -> Result<Matrix, MatrixError> {
    check_len(nrows, ncols, data.len())?;
    if data.is_empty() {
        return Ok(Matrix::zeros(nrows, ncols));
    }
    Ok(Matrix::from_row_slice(nrows, ncols, data))
}

pub fn zeros(nrows: usize, ncols: usize) -> Matrix {
    Matrix::zeros(nrows, ncols)
}
