use crate::core::errors::MazeError;
use crate::core::grid::Grid;
use crate::core::models::Cell;

/// A finished maze: the walls plus where the run starts and ends. Never
/// changes once built; a new maze replaces it wholesale.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Maze {
    grid: Grid,
    start: Cell,
    goal: Cell,
    seed: Option<u64>,
}

impl Maze {
    pub fn new(grid: Grid, start: Cell, goal: Cell, seed: Option<u64>) -> Result<Maze, MazeError> {
        for cell in [start, goal] {
            if !grid.contains(&cell) {
                return Err(MazeError::OutOfBounds(cell));
            }
        }
        Ok(Maze {
            grid,
            start,
            goal,
            seed,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// The seed the maze was generated from, `None` for hand-built mazes.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }
}
