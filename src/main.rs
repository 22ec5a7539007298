// Terminal maze game on top of the maze engine.
// Controls: W/A/S/D or arrow keys move, P solves and plays the solution back,
// R resets the player, N generates the next maze, F toggles fog of war, Q quits.
// Tiles: '#' wall, '@' player, 'S' start, 'G' goal, '.' solution, '~' fog.

use clap::{Parser, ValueEnum};
use log::info;
use maze_engine::config::GameConfig;
use maze_engine::console_interface::{
    ConsoleInput, cleanup_terminal, handle_input, render_game, render_maze_to_string, setup_terminal,
};
use maze_engine::core::{generate_with, solve, GameSession, GoalPolicy, SessionState};
use maze_engine::maze_graph::{get_json_data, get_maze_info, MazeInfo};
use maze_engine::models::{GameRenderState, UserAction};
use rand::Rng;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

const INPUT_POLL: Duration = Duration::from_millis(50);

/// Maze generator, solver and terminal game
#[derive(Parser, Debug)]
#[command(version, long_about = None)]
struct Args {
    /// What to do with the maze
    #[arg(value_enum, default_value_t = Mode::Play)]
    mode: Mode,

    /// Maze width in cells, odd, 5 to 51
    #[arg(long)]
    width: Option<usize>,

    /// Maze height in cells, odd, 5 to 51
    #[arg(long)]
    height: Option<usize>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Put the goal on the cell farthest from the start instead of the opposite corner
    #[arg(long)]
    farthest_goal: bool,

    /// Only show what the player has explored
    #[arg(long)]
    fog: bool,

    /// JSON config file, defaults to $MAZE_CONFIG
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    Play,
    Print,
    Stats,
    Export,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = GameConfig::load_or_default(args.config.as_deref())?;
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.farthest_goal {
        config.goal_policy = GoalPolicy::Farthest;
    }
    config.fog_of_war |= args.fog;

    let seed = config.seed.unwrap_or_else(|| rand::rng().random());

    match args.mode {
        Mode::Play => {
            init_logger(Some(&config.log_file))?;
            run_interactive(&config, seed)?;
        }
        Mode::Print => {
            init_logger(None)?;
            let maze = generate_with(config.width, config.height, seed, &config.generate_options())?;
            let solution = solve(maze.grid(), maze.start(), maze.goal())?;
            println!("seed {}", seed);
            print!("{}", render_maze_to_string(&maze, None, Some(solution.cells())));
        }
        Mode::Stats => {
            init_logger(None)?;
            let maze = generate_with(config.width, config.height, seed, &config.generate_options())?;
            println!("seed {}: {}", seed, get_maze_info(&maze));
        }
        Mode::Export => {
            init_logger(None)?;
            let maze = generate_with(config.width, config.height, seed, &config.generate_options())?;
            println!("{}", get_json_data(&maze)?);
        }
    }

    Ok(())
}

/// Logs go to stderr, or to `log_file` while the terminal UI owns the screen.
fn init_logger(log_file: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(path) = log_file {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = std::fs::OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn run_interactive(config: &GameConfig, seed: u64) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = GameSession::with_options(config.generate_options());
    // reject a bad size before the terminal is taken over
    session.new_maze(config.width, config.height, seed)?;

    let mut terminal = setup_terminal()?;
    let result = play(&mut terminal, &mut session, config, seed);
    cleanup_terminal()?;
    result
}

fn play(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut GameSession,
    config: &GameConfig,
    seed: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    let playback_interval = Duration::from_millis(config.playback_interval_ms);
    let mut seed = seed;
    let mut fog_of_war = config.fog_of_war;
    let mut message = None;
    let mut last_move = None;
    let mut info = maze_info_line(session, seed);

    loop {
        let view = session.current_state();
        let to_render = GameRenderState {
            won: view.is_some_and(|view| view.player_at_goal()),
            view,
            fog_of_war,
            info: info.clone(),
            message: message.clone(),
            last_move,
        };
        render_game(terminal, &to_render)?;

        let poll_for = if session.state() == SessionState::Solving {
            playback_interval
        } else {
            INPUT_POLL
        };

        match handle_input(poll_for)? {
            ConsoleInput::Quit => {
                session.exit();
                break;
            }
            ConsoleInput::UserAction(user_action) => {
                last_move = None;
                message = None;
                match user_action {
                    UserAction::Move(direction) => {
                        let result = session.move_player(direction);
                        if result.reached_goal {
                            message = Some("Goal reached!".to_string());
                        } else if result.new_junction && config.junction_gates {
                            message = gate_junction(session);
                        } else if !result.moved {
                            if let Some(allowed) = session.current_state().and_then(|view| view.allowed_direction) {
                                message = Some(format!("Only {:?} is open from this junction", allowed));
                            }
                        }
                        last_move = Some(result);
                    }
                    UserAction::Solve => {
                        message = Some(match session.request_solve() {
                            Ok(path) => format!("Solution: {} steps", path.steps()),
                            Err(err) => err.to_string(),
                        });
                    }
                    UserAction::ResetPlayer => session.reset_player(),
                    UserAction::NewMaze => {
                        seed = seed.wrapping_add(1);
                        let generated = session.new_maze(config.width, config.height, seed).map(|_| ());
                        match generated {
                            Ok(()) => info = maze_info_line(session, seed),
                            Err(err) => message = Some(err.to_string()),
                        }
                    }
                    UserAction::ToggleFog => fog_of_war = !fog_of_war,
                }
            }
            ConsoleInput::Timeout => {
                if let Some(result) = session.advance_playback() {
                    last_move = Some(result);
                }
            }
            ConsoleInput::Unknown => {}
        }
    }

    info!("leaving game");
    Ok(())
}

/// Limits the next move to the first step of the way to the goal.
fn gate_junction(session: &mut GameSession) -> Option<String> {
    let view = session.current_state()?;
    let path = solve(view.grid(), view.player, view.goal()).ok()?;
    let direction = view.player.direction_to(*path.cells().get(1)?)?;
    if session.restrict_next_move(direction) {
        Some(format!("Junction! Only {:?} is open", direction))
    } else {
        None
    }
}

fn maze_info_line(session: &GameSession, seed: u64) -> String {
    match session.current_state() {
        Some(view) => {
            let maze_info = MazeInfo::new(view.maze);
            info!("{}", maze_info.to_log_string());
            format!("Seed {}. {}", seed, maze_info.to_human_string())
        }
        None => String::new(),
    }
}
