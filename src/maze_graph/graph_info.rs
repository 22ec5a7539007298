use crate::core::{solve, Maze};
use crate::maze_graph::graph::is_perfect;

pub struct MazeInfo {
    pub width: usize,
    pub height: usize,
    pub cells: usize,
    pub passages: usize,
    pub dead_ends: usize,
    pub junctions: usize,
    pub solution_length: Option<usize>,
    pub perfect: bool,
}

impl MazeInfo {
    pub fn new(maze: &Maze) -> Self {
        let grid = maze.grid();
        let mut dead_ends = 0;
        let mut junctions = 0;
        for cell in grid.cells() {
            if grid.is_junction(cell) {
                junctions += 1;
            } else if grid.open_neighbors(cell).count() == 1 {
                dead_ends += 1;
            }
        }

        Self {
            width: maze.width(),
            height: maze.height(),
            cells: grid.cell_count(),
            passages: grid.passage_count(),
            dead_ends,
            junctions,
            solution_length: solve(grid, maze.start(), maze.goal())
                .ok()
                .map(|path| path.len()),
            perfect: is_perfect(grid),
        }
    }

    pub fn to_human_string(&self) -> String {
        let solution = match self.solution_length {
            Some(length) => format!("{} cells", length),
            None => "unreachable".to_string(),
        };
        format!(
            "{}x{} maze: {} cells, {} passages, {} dead ends, {} junctions. Solution: {}. {}",
            self.width,
            self.height,
            self.cells,
            self.passages,
            self.dead_ends,
            self.junctions,
            solution,
            if self.perfect { "Perfect maze." } else { "Not a perfect maze!" }
        )
    }

    pub fn to_log_string(&self) -> String {
        format!(
            "size: {}x{}, passages: {}, dead_ends: {}, solution: {:?}, perfect: {}",
            self.width, self.height, self.passages, self.dead_ends, self.solution_length, self.perfect
        )
    }
}

pub fn get_maze_info(maze: &Maze) -> String {
    MazeInfo::new(maze).to_human_string()
}
