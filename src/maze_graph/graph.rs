use std::collections::HashMap;
use petgraph::graph::{NodeIndex, UnGraph};
use crate::core::{Cell, Grid};

/// The passage graph: one node per cell, one edge per removed wall.
pub fn convert_to_petgraph(grid: &Grid) -> UnGraph<Cell, ()> {
    let mut petgraph = UnGraph::with_capacity(grid.cell_count(), grid.cell_count());

    let node_map: HashMap<Cell, NodeIndex> = grid
        .cells()
        .map(|cell| (cell, petgraph.add_node(cell)))
        .collect();

    for cell in grid.cells() {
        for next in grid.open_neighbors(cell) {
            // each passage is seen from both sides, keep one
            if next < cell {
                continue;
            }
            if let (Some(&from_index), Some(&to_index)) = (node_map.get(&cell), node_map.get(&next)) {
                petgraph.add_edge(from_index, to_index, ());
            }
        }
    }

    petgraph
}

/// A perfect maze's passages form a spanning tree: connected, and one edge
/// fewer than there are cells.
pub fn is_perfect(grid: &Grid) -> bool {
    let graph = convert_to_petgraph(grid);
    graph.node_count() > 0
        && petgraph::algo::connected_components(&graph) == 1
        && graph.edge_count() == graph.node_count() - 1
}

pub fn has_cycle(grid: &Grid) -> bool {
    petgraph::algo::is_cyclic_undirected(&convert_to_petgraph(grid))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::test_util::open_grid;

    #[test]
    fn open_grid_has_cycles() {
        let grid = open_grid(5, 5);
        assert!(has_cycle(&grid));
        assert!(!is_perfect(&grid));
    }

    #[test]
    fn walled_grid_is_disconnected() {
        let grid = Grid::new(5, 5).unwrap();
        let graph = convert_to_petgraph(&grid);
        assert_eq!(graph.node_count(), 25);
        assert_eq!(graph.edge_count(), 0);
        assert!(!is_perfect(&grid));
        assert!(!has_cycle(&grid));
    }
}
