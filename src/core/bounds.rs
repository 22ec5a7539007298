use crate::core::models::Cell;

/// A bounding box with one corner fixed at 0,0 and assumed to have positive extent
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoundsOriginRoot {
    pub extent: Cell,
}

impl BoundsOriginRoot {
    pub fn new(x: i32, y: i32) -> BoundsOriginRoot {
        BoundsOriginRoot {
            extent: Cell { x, y }
        }
    }

    pub fn contains(&self, pos: &Cell) -> bool {
        pos.x >= 0 && pos.x < self.extent.x && pos.y >= 0 && pos.y < self.extent.y
    }

    pub fn area(&self) -> i32 {
        self.extent.x * self.extent.y
    }

    pub fn index_of(&self, pos: &Cell) -> usize {
        (pos.y * self.extent.x + pos.x) as usize
    }

    pub fn cell_at(&self, index: usize) -> Cell {
        let index = index as i32;
        Cell {
            x: index % self.extent.x,
            y: index / self.extent.x,
        }
    }

    /// The corner diagonally across from `pos`.
    pub fn mirror(&self, pos: &Cell) -> Cell {
        Cell {
            x: self.extent.x - 1 - pos.x,
            y: self.extent.y - 1 - pos.y,
        }
    }
}
