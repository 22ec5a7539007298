mod bounded_grid;
mod bounds;
mod consts;
mod errors;
mod generator;
mod grid;
mod maze;
mod models;
mod session;
mod solver;
mod update;

pub use bounded_grid::BoundedGrid;
pub use bounds::BoundsOriginRoot;
pub use consts::*;
pub use errors::MazeError;
pub use generator::{generate, generate_with, GenerateOptions};
pub use grid::Grid;
pub use maze::Maze;
pub use models::{
    BlockReason, Cell, Direction, GoalPolicy, MoveKind, MoveResult, MoveUpdate, PlayerState,
    SessionState, Walls,
};
pub use session::{GameSession, MazeView};
pub use solver::{distance_map, farthest_cell, solve, SolutionPath};
pub use update::step;
