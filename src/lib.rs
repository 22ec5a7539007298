pub mod config;
pub mod console_interface;
pub mod core;
pub mod maze_graph;
pub mod models;

#[cfg(test)]
mod test;
