use std::fmt;
use serde::{Deserialize, Serialize};

/// A grid position, `x` is the column and `y` the row, both 0-indexed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Cell {
        Cell { x, y }
    }

    // wraps at the i32 limits, which lie outside every grid either way
    pub fn offset(self, direction: Direction) -> Cell {
        let delta = direction.delta();
        Cell {
            x: self.x.wrapping_add(delta.x),
            y: self.y.wrapping_add(delta.y),
        }
    }

    /// The direction to step from `self` to reach `other`, if they touch.
    pub fn direction_to(self, other: Cell) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&dir| self.offset(dir) == other)
    }
}

// row-major, so sorted cells read like the rendered maze
impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Canonical order for neighbor enumeration and search expansion.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn delta(self) -> Cell {
        match self {
            Direction::Up => Cell { x: 0, y: -1 },
            Direction::Down => Cell { x: 0, y: 1 },
            Direction::Left => Cell { x: -1, y: 0 },
            Direction::Right => Cell { x: 1, y: 0 },
        }
    }
}

/// Wall flags on the four sides of a cell. `true` means the wall exists.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Walls {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Walls {
    pub const fn all() -> Walls {
        Walls {
            up: true,
            down: true,
            left: true,
            right: true,
        }
    }

    pub fn get(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn set(&mut self, direction: Direction, present: bool) {
        match direction {
            Direction::Up => self.up = present,
            Direction::Down => self.down = present,
            Direction::Left => self.left = present,
            Direction::Right => self.right = present,
        }
    }
}

impl Default for Walls {
    fn default() -> Self {
        Walls::all()
    }
}

/// Where the goal is placed relative to the start when a maze is generated.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalPolicy {
    #[default]
    OppositeCorner,
    Farthest,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PlayerState {
    pub position: Cell,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SessionState {
    Idle,
    Ready,
    Solving,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct MoveResult {
    pub moved: bool,
    pub reached_goal: bool,
    /// The move ended on a junction the player had not stood on before.
    pub new_junction: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MoveKind {
    Walk,
    ReachedGoal,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BlockReason {
    OutOfBounds,
    Wall,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MoveUpdate {
    Moved(PlayerState, MoveKind),
    Blocked(BlockReason),
}

impl From<MoveUpdate> for MoveResult {
    fn from(update: MoveUpdate) -> Self {
        match update {
            MoveUpdate::Moved(_, kind) => MoveResult {
                moved: true,
                reached_goal: kind == MoveKind::ReachedGoal,
                new_junction: false,
            },
            MoveUpdate::Blocked(_) => MoveResult::default(),
        }
    }
}
