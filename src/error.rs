use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// A row's length differs from the first row's.
    #[error("row {row} has {found} entries, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("{len} values cannot fill a {nrows}x{ncols} matrix")]
    LengthMismatch { nrows: usize, ncols: usize, len: usize },

    #[error("{nrows}x{ncols} overflows usize")]
    DimensionOverflow { nrows: usize, ncols: usize },

    /// Caller-provided output buffer is not one slot per column.
    #[error("output buffer has {found} slots, expected {expected}")]
    OutputLength { expected: usize, found: usize },
}
