use thiserror::Error;

/// Errors raised by the life engine and its collaborators.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LifeError {
    /// A grid needs at least one column and one row.
    #[error("invalid grid dimensions {cols}x{rows}: both must be positive")]
    InvalidDimensions { cols: usize, rows: usize },

    /// A coordinate outside `[0, cols) x [0, rows)`.
    #[error("cell ({x}, {y}) is outside the {cols}x{rows} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        cols: usize,
        rows: usize,
    },

    #[error("expected {expected} cells, got {actual}")]
    CellCountMismatch { expected: usize, actual: usize },

    #[error("unexpected {found:?} in pattern at line {line}, column {column}")]
    InvalidPattern {
        line: usize,
        column: usize,
        found: char,
    },

    #[error("fill ratio {0} must be between 0.0 and 1.0")]
    InvalidFill(f64),
}

pub type Result<T> = std::result::Result<T, LifeError>;
