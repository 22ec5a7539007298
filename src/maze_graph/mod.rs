mod graph;
mod graph_info;
mod json_export;

pub use graph::{convert_to_petgraph, has_cycle, is_perfect};
pub use graph_info::{get_maze_info, MazeInfo};
pub use json_export::get_json_data;
