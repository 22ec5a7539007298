use serde::{Deserialize, Serialize};
use crate::core::{distance_map, Cell, Maze};

#[derive(Serialize, Deserialize, Debug)]
struct JsonData {
    width: usize,
    height: usize,
    seed: Option<u64>,
    start: Cell,
    goal: Cell,
    nodes: Vec<JsonNode>,
    links: Vec<JsonEdge>,
}

#[derive(Serialize, Deserialize, Debug)]
struct JsonNode {
    id: usize,
    x: i32,
    y: i32,
    distance: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug)]
struct JsonEdge {
    source: usize,
    target: usize,
}

/// The maze as a node-link document; node ids are row-major cell indices and
/// `distance` is the number of steps from the start.
pub fn get_json_data(maze: &Maze) -> Result<String, serde_json::Error> {
    let grid = maze.grid();
    let bounds = grid.bounds();
    let distances = distance_map(grid, maze.start());

    let nodes: Vec<JsonNode> = grid.cells()
        .map(|cell| JsonNode {
            id: bounds.index_of(&cell),
            x: cell.x,
            y: cell.y,
            distance: distances[&cell],
        })
        .collect();

    let links: Vec<JsonEdge> = grid.cells()
        .flat_map(move |cell| {
            grid.open_neighbors(cell)
                .filter(move |&next| next > cell)
                .map(move |next| JsonEdge {
                    source: bounds.index_of(&cell),
                    target: bounds.index_of(&next),
                })
        })
        .collect();

    let json_data = JsonData {
        width: maze.width(),
        height: maze.height(),
        seed: maze.seed(),
        start: maze.start(),
        goal: maze.goal(),
        nodes,
        links,
    };
    serde_json::to_string_pretty(&json_data)
}
