use crate::core::maze::Maze;
use crate::core::models::{BlockReason, Direction, MoveKind, MoveUpdate, PlayerState};

pub fn step(maze: &Maze, player: &PlayerState, direction: Direction) -> MoveUpdate {
    let grid = maze.grid();
    let destination = player.position.offset(direction);

    if !grid.contains(&destination) {
        return MoveUpdate::Blocked(BlockReason::OutOfBounds);
    }
    if !grid.is_open(player.position, direction) {
        return MoveUpdate::Blocked(BlockReason::Wall);
    }

    let kind = if destination == maze.goal() {
        MoveKind::ReachedGoal
    } else {
        MoveKind::Walk
    };
    MoveUpdate::Moved(PlayerState { position: destination }, kind)
}
