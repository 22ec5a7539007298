use crate::core::bounds::BoundsOriginRoot;
use crate::core::models::Cell;

/// Row-major storage of one value per cell.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BoundedGrid<T> {
    bounds: BoundsOriginRoot,
    cells: Vec<T>,
}

impl<T> BoundedGrid<T> {
    pub fn new_with_size(width: i32, height: i32, default: T) -> Self
    where
        T: Clone,
    {
        let bounds = BoundsOriginRoot::new(width, height);
        BoundedGrid::new(bounds, default)
    }

    pub fn new(bounds: BoundsOriginRoot, default: T) -> Self
    where
        T: Clone,
    {
        let cells = vec![default; bounds.area() as usize];
        BoundedGrid {
            bounds,
            cells,
        }
    }

    pub fn size(&self) -> BoundsOriginRoot {
        self.bounds
    }

    pub fn contains(&self, pos: &Cell) -> bool {
        self.bounds.contains(pos)
    }

    pub fn get(&self, pos: &Cell) -> Option<&T> {
        if !self.bounds.contains(pos) {
            return None;
        }
        Some(&self[pos])
    }

    /// Cells paired with their values, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, &T)> {
        let bounds = self.bounds;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, value)| (bounds.cell_at(index), value))
    }
}

impl<T> std::ops::Index<&Cell> for BoundedGrid<T> {
    type Output = T;

    fn index(&self, index: &Cell) -> &Self::Output {
        &self.cells[self.bounds.index_of(index)]
    }
}

impl<T> std::ops::IndexMut<&Cell> for BoundedGrid<T> {
    fn index_mut(&mut self, index: &Cell) -> &mut Self::Output {
        let index = self.bounds.index_of(index);
        &mut self.cells[index]
    }
}
