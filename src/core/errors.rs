use thiserror::Error;
use crate::core::consts::{MAX_DIMENSION, MIN_DIMENSION};
use crate::core::models::Cell;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze dimensions must be odd numbers between {min} and {max}, got {width}x{height}", min = MIN_DIMENSION, max = MAX_DIMENSION)]
    InvalidDimension { width: usize, height: usize },
    #[error("cells {a} and {b} are not adjacent")]
    NotAdjacent { a: Cell, b: Cell },
    #[error("cell {0} is outside the maze")]
    OutOfBounds(Cell),
    #[error("no path from {start} to {goal}, the maze is corrupt")]
    UnreachableGoal { start: Cell, goal: Cell },
    #[error("no maze is loaded")]
    NoMazeLoaded,
    #[error("malformed maze text: {0}")]
    MalformedLevel(String),
}
