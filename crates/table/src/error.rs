use thiserror::Error;

/// Errors raised while assembling a table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A table was configured without any columns.
    #[error("Table must have at least one column")]
    NoColumns,
    /// A row's cell count disagrees with the configured column count.
    #[error("Row has {actual} cells but the table has {expected} columns")]
    RowLength {
        /// Number of configured columns.
        expected: usize,
        /// Number of cells supplied.
        actual: usize,
    },
}

impl TableError {
    /// Create a row length mismatch error.
    pub fn row_length(expected: usize, actual: usize) -> Self {
        Self::RowLength { expected, actual }
    }
}
