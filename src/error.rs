//! Error types for maze operations.

use thiserror::Error;

use crate::Point;

/// Result type alias for maze operations.
pub type MazeResult<T> = Result<T, MazeError>;

/// Errors that can occur when building or solving a maze.
///
/// Every check runs before the maze is touched, so a failed call leaves
/// the maze exactly as it was.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    /// Grid must have more than one row and more than one column.
    #[error("rows and columns must both be greater than 1, got {rows}x{columns}")]
    InvalidDimension { rows: usize, columns: usize },

    /// Coordinate lies outside the grid.
    #[error("cell {point} is outside the grid, must be within [0, {rows}) x [0, {columns})")]
    InvalidCoordinate {
        point: Point,
        rows: usize,
        columns: usize,
    },

    /// Start and goal name the same cell.
    #[error("start and goal must be different cells, both are {0}")]
    DuplicateEndpoint(Point),

    /// Operation called in the wrong phase.
    #[error("{0}")]
    PreconditionViolation(&'static str),
}
