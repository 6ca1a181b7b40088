//! Error types of the crate.
//!
//! Every fallible operation returns [`LifeError`] through the [`Result`] alias.

/// Errors raised while building a grid or talking to collaborators.
#[derive(Debug, thiserror::Error)]
pub enum LifeError {
    /// The grid has no rows or its rows have no cells.
    #[error("grid must contain at least one row and one column")]
    EmptyGrid,

    /// The requested grid holds more cells than can be allocated.
    #[error("grid of {height} x {width} cells is too large")]
    TooLarge {
        /// Requested number of rows.
        height: usize,
        /// Requested number of columns.
        width: usize,
    },

    /// The fill rate of a random grid is not a number.
    #[error("fill rate must be a number between 0 and 1, got {0}")]
    InvalidFillRate(f64),

    /// A row's length differs from the first row's length.
    #[error("row {row} has {found} cells, expected {expected}")]
    JaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// A cell holds something other than 0 or 1.
    #[error("cell ({row}, {col}) has value {value}, expected 0 or 1")]
    InvalidCell {
        /// Row of the cell.
        row: usize,
        /// Column of the cell.
        col: usize,
        /// The rejected value.
        value: u8,
    },

    /// The RLE input could not be parsed.
    #[error("invalid RLE pattern: {0}")]
    InvalidRle(String),

    /// The input stream ended before a value was read.
    #[error("input ended before a value was entered")]
    NoInput,

    /// Reading or writing a stream failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LifeError>;
