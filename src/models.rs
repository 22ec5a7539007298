use crate::core::{Direction, MazeView, MoveResult};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum UserAction {
    Move(Direction),
    Solve,
    ResetPlayer,
    NewMaze,
    ToggleFog,
}

pub struct GameRenderState<'a> {
    pub view: Option<MazeView<'a>>,
    pub won: bool,
    pub fog_of_war: bool,
    pub info: String,
    pub message: Option<String>,
    pub last_move: Option<MoveResult>,
}
