use log::debug;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use crate::core::bounded_grid::BoundedGrid;
use crate::core::errors::MazeError;
use crate::core::grid::Grid;
use crate::core::maze::Maze;
use crate::core::models::{Cell, Direction, GoalPolicy};
use crate::core::solver::farthest_cell;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerateOptions {
    pub start: Cell,
    pub goal_policy: GoalPolicy,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        GenerateOptions {
            start: Cell::new(0, 0),
            goal_policy: GoalPolicy::OppositeCorner,
        }
    }
}

pub fn generate(width: usize, height: usize, seed: u64) -> Result<Maze, MazeError> {
    generate_with(width, height, seed, &GenerateOptions::default())
}

/// Builds a perfect maze with a randomized depth-first backtracker.
///
/// Every cell is visited exactly once and each visit opens exactly one wall,
/// so the passages form a spanning tree. The same arguments always produce
/// the same maze.
pub fn generate_with(
    width: usize,
    height: usize,
    seed: u64,
    options: &GenerateOptions,
) -> Result<Maze, MazeError> {
    let mut grid = Grid::new(width, height)?;
    let start = options.start;
    if !grid.contains(&start) {
        return Err(MazeError::OutOfBounds(start));
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    carve_passages(&mut grid, start, &mut rng);

    let goal = match options.goal_policy {
        GoalPolicy::OppositeCorner => grid.bounds().mirror(&start),
        GoalPolicy::Farthest => farthest_cell(&grid, start),
    };
    debug!("generated {width}x{height} maze from seed {seed}, start {start}, goal {goal}");

    Maze::new(grid, start, goal, Some(seed))
}

fn carve_passages(grid: &mut Grid, start: Cell, rng: &mut SmallRng) {
    let mut visited = BoundedGrid::new(grid.bounds(), false);
    let mut stack = Vec::with_capacity(grid.cell_count());
    let mut candidates: Vec<Direction> = Vec::with_capacity(4);

    visited[&start] = true;
    stack.push(start);

    while let Some(&current) = stack.last() {
        candidates.clear();
        candidates.extend(Direction::ALL.into_iter().filter(|&dir| {
            visited.get(&current.offset(dir)) == Some(&false)
        }));

        let Some(&dir) = candidates.choose(rng) else {
            stack.pop();
            continue;
        };

        let next = current.offset(dir);
        grid.set_wall(current, dir, false);
        visited[&next] = true;
        stack.push(next);
    }
}
