use std::collections::VecDeque;
use log::debug;
use crate::core::bounded_grid::BoundedGrid;
use crate::core::errors::MazeError;
use crate::core::grid::Grid;
use crate::core::models::Cell;

/// Cells from start to goal, both included.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SolutionPath {
    cells: Vec<Cell>,
}

impl SolutionPath {
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of moves needed to walk the path.
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }
}

/// Shortest path by breadth-first search over open passages.
///
/// Neighbors are expanded in the canonical `Up, Right, Down, Left` order and
/// each cell keeps the parent that discovered it first, so among several
/// shortest paths the same one is always returned.
pub fn solve(grid: &Grid, start: Cell, goal: Cell) -> Result<SolutionPath, MazeError> {
    for cell in [start, goal] {
        if !grid.contains(&cell) {
            return Err(MazeError::OutOfBounds(cell));
        }
    }

    let mut parents: BoundedGrid<Option<Cell>> = BoundedGrid::new(grid.bounds(), None);
    let mut seen = BoundedGrid::new(grid.bounds(), false);
    let mut queue = VecDeque::new();
    seen[&start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == goal {
            break;
        }
        for next in grid.open_neighbors(current) {
            if seen[&next] {
                continue;
            }
            seen[&next] = true;
            parents[&next] = Some(current);
            queue.push_back(next);
        }
    }

    if !seen[&goal] {
        return Err(MazeError::UnreachableGoal { start, goal });
    }

    let mut cells = vec![goal];
    let mut current = goal;
    while let Some(parent) = parents[&current] {
        cells.push(parent);
        current = parent;
    }
    cells.reverse();
    debug!("solved {start} -> {goal} in {} steps", cells.len() - 1);

    Ok(SolutionPath { cells })
}

/// Edge distance from `start` to every cell it can reach.
pub fn distance_map(grid: &Grid, start: Cell) -> BoundedGrid<Option<u32>> {
    let mut distances = BoundedGrid::new(grid.bounds(), None);
    if !grid.contains(&start) {
        return distances;
    }

    let mut queue = VecDeque::new();
    distances[&start] = Some(0);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let Some(distance) = distances[&current] else {
            continue;
        };
        for next in grid.open_neighbors(current) {
            if distances[&next].is_none() {
                distances[&next] = Some(distance + 1);
                queue.push_back(next);
            }
        }
    }
    distances
}

/// The reachable cell farthest from `start`; ties go to the first cell in
/// row-major order.
pub fn farthest_cell(grid: &Grid, start: Cell) -> Cell {
    let distances = distance_map(grid, start);
    let mut best = (start, 0);
    for (cell, distance) in distances.iter() {
        if let Some(distance) = *distance {
            if distance > best.1 {
                best = (cell, distance);
            }
        }
    }
    best.0
}
