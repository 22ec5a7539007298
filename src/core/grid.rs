use crate::core::bounded_grid::BoundedGrid;
use crate::core::bounds::BoundsOriginRoot;
use crate::core::consts::is_valid_dimension;
use crate::core::errors::MazeError;
use crate::core::models::{Cell, Direction, Walls};

/// Rectangular maze grid. Every cell carries its own wall flags, and the flags
/// of two adjacent cells always agree about the wall between them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    walls: BoundedGrid<Walls>,
}

impl Grid {
    /// A fully walled grid. Both dimensions must be odd and within the
    /// accepted range; nothing is allocated otherwise.
    pub fn new(width: usize, height: usize) -> Result<Grid, MazeError> {
        if !is_valid_dimension(width) || !is_valid_dimension(height) {
            return Err(MazeError::InvalidDimension { width, height });
        }
        Ok(Grid {
            walls: BoundedGrid::new_with_size(width as i32, height as i32, Walls::all()),
        })
    }

    pub fn width(&self) -> usize {
        self.walls.size().extent.x as usize
    }

    pub fn height(&self) -> usize {
        self.walls.size().extent.y as usize
    }

    pub fn bounds(&self) -> BoundsOriginRoot {
        self.walls.size()
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.walls.contains(cell)
    }

    pub fn cell_count(&self) -> usize {
        self.walls.size().area() as usize
    }

    /// All cells, row-major.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.walls.iter().map(|(cell, _)| cell)
    }

    pub fn walls(&self, cell: &Cell) -> Option<Walls> {
        self.walls.get(cell).copied()
    }

    /// In-bounds cells next to `cell`, in canonical direction order. Empty
    /// when `cell` itself is off the grid.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        let inside = self.contains(&cell);
        Direction::ALL
            .into_iter()
            .filter(move |_| inside)
            .map(move |dir| cell.offset(dir))
            .filter(|next| self.contains(next))
    }

    /// Neighbors reachable from `cell` without crossing a wall.
    pub fn open_neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        Direction::ALL
            .into_iter()
            .filter(move |&dir| self.is_open(cell, dir))
            .map(move |dir| cell.offset(dir))
    }

    /// More than two open passages meet at `cell`.
    pub fn is_junction(&self, cell: Cell) -> bool {
        self.open_neighbors(cell).count() > 2
    }

    /// Whether a step from `cell` towards `direction` stays in bounds and
    /// crosses no wall.
    pub fn is_open(&self, cell: Cell, direction: Direction) -> bool {
        let Some(walls) = self.walls.get(&cell) else {
            return false;
        };
        !walls.get(direction) && self.contains(&cell.offset(direction))
    }

    pub fn has_wall(&self, a: Cell, b: Cell) -> Result<bool, MazeError> {
        let direction = self.adjacency(a, b)?;
        Ok(self.walls[&a].get(direction))
    }

    pub fn remove_wall(&mut self, a: Cell, b: Cell) -> Result<(), MazeError> {
        let direction = self.adjacency(a, b)?;
        self.set_wall(a, direction, false);
        Ok(())
    }

    pub fn add_wall(&mut self, a: Cell, b: Cell) -> Result<(), MazeError> {
        let direction = self.adjacency(a, b)?;
        self.set_wall(a, direction, true);
        Ok(())
    }

    /// Number of removed walls between cells, counting each passage once.
    pub fn passage_count(&self) -> usize {
        self.walls
            .iter()
            .map(|(cell, walls)| {
                let right = !walls.right && self.contains(&cell.offset(Direction::Right));
                let down = !walls.down && self.contains(&cell.offset(Direction::Down));
                right as usize + down as usize
            })
            .sum()
    }

    /// Callers guarantee `cell` and its neighbor towards `direction` are both
    /// in bounds.
    pub(crate) fn set_wall(&mut self, cell: Cell, direction: Direction, present: bool) {
        let other = cell.offset(direction);
        self.walls[&cell].set(direction, present);
        self.walls[&other].set(direction.opposite(), present);
    }

    fn adjacency(&self, a: Cell, b: Cell) -> Result<Direction, MazeError> {
        if !self.contains(&a) || !self.contains(&b) {
            return Err(MazeError::NotAdjacent { a, b });
        }
        a.direction_to(b).ok_or(MazeError::NotAdjacent { a, b })
    }
}
