use std::collections::HashSet;
use log::{debug, error, info, warn};
use crate::core::errors::MazeError;
use crate::core::generator::{generate_with, GenerateOptions};
use crate::core::grid::Grid;
use crate::core::maze::Maze;
use crate::core::models::{Cell, Direction, MoveResult, MoveUpdate, PlayerState, SessionState};
use crate::core::solver::{solve, SolutionPath};
use crate::core::update::step;

/// Read-only view of a loaded maze, handed to renderers.
#[derive(Clone, Copy, Debug)]
pub struct MazeView<'a> {
    pub maze: &'a Maze,
    pub player: Cell,
    pub explored: &'a HashSet<Cell>,
    /// The path being played back, if a solve is in progress.
    pub solution: Option<&'a [Cell]>,
    /// The only direction the next move may take, if restricted.
    pub allowed_direction: Option<Direction>,
    pub state: SessionState,
}

impl<'a> MazeView<'a> {
    pub fn grid(&self) -> &'a Grid {
        self.maze.grid()
    }

    pub fn start(&self) -> Cell {
        self.maze.start()
    }

    pub fn goal(&self) -> Cell {
        self.maze.goal()
    }

    pub fn is_explored(&self, cell: &Cell) -> bool {
        self.explored.contains(cell)
    }

    pub fn player_at_goal(&self) -> bool {
        self.player == self.maze.goal()
    }
}

struct Playback {
    path: SolutionPath,
    index: usize,
}

struct ActiveMaze {
    maze: Maze,
    player: PlayerState,
    explored: HashSet<Cell>,
    visited_junctions: HashSet<Cell>,
    allowed_direction: Option<Direction>,
    playback: Option<Playback>,
}

impl ActiveMaze {
    fn new(maze: Maze) -> Self {
        let start = maze.start();
        ActiveMaze {
            maze,
            player: PlayerState { position: start },
            explored: HashSet::from([start]),
            visited_junctions: HashSet::new(),
            allowed_direction: None,
            playback: None,
        }
    }

    fn state(&self) -> SessionState {
        if self.playback.is_some() {
            SessionState::Solving
        } else {
            SessionState::Ready
        }
    }

    fn view(&self) -> MazeView<'_> {
        MazeView {
            maze: &self.maze,
            player: self.player.position,
            explored: &self.explored,
            solution: self.playback.as_ref().map(|playback| playback.path.cells()),
            allowed_direction: self.allowed_direction,
            state: self.state(),
        }
    }

    fn apply(&mut self, update: MoveUpdate) -> MoveResult {
        let mut result = MoveResult::from(update);
        if let MoveUpdate::Moved(player, _) = update {
            self.player = player;
            self.explored.insert(player.position);
            self.allowed_direction = None;
            if self.maze.grid().is_junction(player.position) {
                result.new_junction = self.visited_junctions.insert(player.position);
            }
        }
        if result.new_junction {
            info!("first visit to junction {}", self.player.position);
        }
        if result.reached_goal {
            info!("player reached the goal at {}", self.player.position);
        }
        result
    }
}

/// One player's game: the current maze, where the player stands, what they
/// have seen, and any solution being played back.
///
/// Idle until a maze is loaded, Ready while the player walks, Solving while a
/// computed solution is being played back.
///
/// The first time the player steps onto a junction the move reports
/// `new_junction`; the front end may then limit the next move to a single
/// direction with [`GameSession::restrict_next_move`].
pub struct GameSession {
    options: GenerateOptions,
    active: Option<ActiveMaze>,
}

impl Default for GameSession {
    fn default() -> Self {
        GameSession::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        GameSession::with_options(GenerateOptions::default())
    }

    pub fn with_options(options: GenerateOptions) -> Self {
        GameSession {
            options,
            active: None,
        }
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    pub fn state(&self) -> SessionState {
        self.active
            .as_ref()
            .map_or(SessionState::Idle, ActiveMaze::state)
    }

    /// Generates a new maze and puts the player on its start. A rejected size
    /// leaves the current game untouched.
    pub fn new_maze(&mut self, width: usize, height: usize, seed: u64) -> Result<MazeView<'_>, MazeError> {
        let maze = generate_with(width, height, seed, &self.options)?;
        info!("new {width}x{height} maze, seed {seed}");
        Ok(self.load_maze(maze))
    }

    pub fn load_maze(&mut self, maze: Maze) -> MazeView<'_> {
        self.active.insert(ActiveMaze::new(maze)).view()
    }

    /// Moves the player one cell. Walls, edges, an empty session, moves
    /// during playback and moves against a restriction all leave the game
    /// unchanged.
    pub fn move_player(&mut self, direction: Direction) -> MoveResult {
        let Some(active) = self.active.as_mut() else {
            return MoveResult::default();
        };
        if active.playback.is_some() {
            warn!("ignoring move {direction:?} during solution playback");
            return MoveResult::default();
        }

        let update = step(&active.maze, &active.player, direction);
        if let (MoveUpdate::Moved(..), Some(allowed)) = (update, active.allowed_direction) {
            if allowed != direction {
                debug!("move {direction:?} refused, only {allowed:?} is allowed");
                return MoveResult::default();
            }
        }
        active.apply(update)
    }

    /// Allows only `direction` for the next move; any successful move lifts
    /// the restriction. Refused, returning `false`, when no maze is loaded or
    /// the player cannot move that way.
    pub fn restrict_next_move(&mut self, direction: Direction) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        if !active.maze.grid().is_open(active.player.position, direction) {
            return false;
        }
        active.allowed_direction = Some(direction);
        true
    }

    /// Solves from the player's current cell to the goal and keeps the path
    /// for playback.
    pub fn request_solve(&mut self) -> Result<SolutionPath, MazeError> {
        let active = self.active.as_mut().ok_or(MazeError::NoMazeLoaded)?;
        let path = solve(active.maze.grid(), active.player.position, active.maze.goal())
            .inspect_err(|err| error!("solver failed on a loaded maze: {err}"))?;

        active.playback = if path.steps() > 0 {
            Some(Playback {
                path: path.clone(),
                index: 0,
            })
        } else {
            None
        };
        Ok(path)
    }

    /// Moves the player one cell along the stored solution. Returns `None`
    /// when nothing is being played back; the session drops back to Ready
    /// once the last cell is reached.
    pub fn advance_playback(&mut self) -> Option<MoveResult> {
        let active = self.active.as_mut()?;
        let playback = active.playback.as_mut()?;
        let next_index = playback.index + 1;
        let remaining = playback.path.len() - next_index;
        let next = playback.path.cells().get(next_index).copied();
        playback.index = next_index;

        let direction = next.and_then(|next| active.player.position.direction_to(next));
        let Some(direction) = direction else {
            warn!("solution playback lost track of the player at {}", active.player.position);
            active.playback = None;
            return None;
        };

        let update = step(&active.maze, &active.player, direction);
        if let MoveUpdate::Blocked(reason) = update {
            warn!("solution playback blocked at {}: {reason:?}", active.player.position);
            active.playback = None;
            return Some(MoveResult::default());
        }
        if remaining <= 1 {
            active.playback = None;
        }
        Some(active.apply(update))
    }

    /// Puts the player back on the start, stops any playback and lifts a move
    /// restriction. Explored cells and visited junctions are kept.
    pub fn reset_player(&mut self) {
        if let Some(active) = self.active.as_mut() {
            active.player = PlayerState { position: active.maze.start() };
            active.allowed_direction = None;
            active.playback = None;
        }
    }

    /// Drops the maze and everything tied to it.
    pub fn exit(&mut self) {
        self.active = None;
    }

    pub fn current_state(&self) -> Option<MazeView<'_>> {
        self.active.as_ref().map(ActiveMaze::view)
    }
}
