#[cfg(test)]
mod test {
    use crate::core::*;
    use crate::maze_graph::{has_cycle, is_perfect};

    fn assert_perfect(maze: &Maze) {
        let grid = maze.grid();
        assert_eq!(
            grid.passage_count(),
            grid.cell_count() - 1,
            "{}x{} maze from seed {:?} is not a tree", maze.width(), maze.height(), maze.seed()
        );
        let distances = distance_map(grid, maze.start());
        assert!(
            distances.iter().all(|(_, distance)| distance.is_some()),
            "{}x{} maze from seed {:?} has unreachable cells", maze.width(), maze.height(), maze.seed()
        );
        assert!(is_perfect(grid));
        assert!(!has_cycle(grid));
    }

    #[test]
    fn every_accepted_size_generates_a_perfect_maze() {
        for size in (MIN_DIMENSION..=MAX_DIMENSION).step_by(2) {
            let maze = generate(size, size, size as u64).unwrap();
            assert_eq!(maze.width(), size);
            assert_eq!(maze.height(), size);
            assert_perfect(&maze);
        }
    }

    #[test]
    fn rectangular_mazes_are_perfect() {
        for (width, height) in [(5, 51), (51, 5), (7, 21), (33, 9)] {
            for seed in [0, 1, u64::MAX] {
                assert_perfect(&generate(width, height, seed).unwrap());
            }
        }
    }

    #[test]
    fn same_seed_same_maze() {
        let first = generate(21, 21, 7).unwrap();
        let second = generate(21, 21, 7).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.seed(), Some(7));
    }

    #[test]
    fn different_seeds_different_mazes() {
        let first = generate(21, 21, 1).unwrap();
        let second = generate(21, 21, 2).unwrap();
        assert_ne!(first.grid(), second.grid());
    }

    #[test]
    fn goal_defaults_to_opposite_corner() {
        let maze = generate(9, 7, 12).unwrap();
        assert_eq!(maze.start(), Cell::new(0, 0));
        assert_eq!(maze.goal(), Cell::new(8, 6));
    }

    #[test]
    fn farthest_goal_is_at_maximum_distance() {
        let options = GenerateOptions {
            goal_policy: GoalPolicy::Farthest,
            ..GenerateOptions::default()
        };
        let maze = generate_with(11, 11, 5, &options).unwrap();
        let distances = distance_map(maze.grid(), maze.start());
        let goal_distance = distances[&maze.goal()].unwrap();

        assert!(distances.iter().all(|(_, distance)| distance.unwrap() <= goal_distance));
        assert_eq!(maze.goal(), farthest_cell(maze.grid(), maze.start()));
        // generation does not depend on where the goal ends up
        assert_eq!(maze.grid(), generate(11, 11, 5).unwrap().grid());
    }

    #[test]
    fn custom_start_is_kept() {
        let options = GenerateOptions {
            start: Cell::new(2, 2),
            ..GenerateOptions::default()
        };
        let maze = generate_with(5, 5, 9, &options).unwrap();
        assert_eq!(maze.start(), Cell::new(2, 2));
        assert_eq!(maze.goal(), Cell::new(2, 2));
        assert_perfect(&maze);
    }

    #[test]
    fn start_outside_the_grid_is_rejected() {
        let options = GenerateOptions {
            start: Cell::new(5, 0),
            ..GenerateOptions::default()
        };
        assert_eq!(
            generate_with(5, 5, 0, &options),
            Err(MazeError::OutOfBounds(Cell::new(5, 0)))
        );
    }

    #[test]
    fn invalid_dimensions_are_rejected() {
        assert_eq!(generate(4, 5, 0), Err(MazeError::InvalidDimension { width: 4, height: 5 }));
        assert_eq!(generate(53, 5, 0), Err(MazeError::InvalidDimension { width: 53, height: 5 }));
        assert_eq!(generate(3, 5, 0), Err(MazeError::InvalidDimension { width: 3, height: 5 }));
        assert_eq!(generate(5, 50, 0), Err(MazeError::InvalidDimension { width: 5, height: 50 }));
    }

    #[test]
    fn smallest_maze_has_an_odd_length_solution() {
        let maze = generate(5, 5, 42).unwrap();
        let path = solve(maze.grid(), maze.start(), maze.goal()).unwrap();

        // corner to corner on a 5x5 grid takes at least 8 steps and at most
        // one visit per cell; every step flips the parity of x + y
        assert!((9..=25).contains(&path.len()), "path of {} cells", path.len());
        assert_eq!(path.len() % 2, 1);
    }
}
