//! Configuration errors.
//!
//! A degenerate grid or an endpoint outside the grid is reported up front
//! rather than discovered by a generator that would otherwise never finish.

use thiserror::Error;

use crate::geom::Position;

/// Invalid grid or maze configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    EmptyGrid { rows: i32, cols: i32 },

    #[error("a maze needs at least 2 cells, got {rows}x{cols}")]
    TooFewCells { rows: i32, cols: i32 },

    #[error("{what} {pos} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        what: &'static str,
        pos: Position,
        rows: i32,
        cols: i32,
    },

    #[error("blocked probability must be in [0, 1), got {0}")]
    InvalidProbability(f64),

    #[error("a {rows}x{cols} grid is too large")]
    TooLarge { rows: usize, cols: usize },

    #[error("grid rows have different lengths")]
    RaggedRows,

    #[error("invalid grid cell character {0:?}")]
    InvalidCell(char),
}

/// Result type for configuration-checked operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
