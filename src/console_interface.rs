// Text encoding of a maze. A w x h maze is drawn as a (2w+1) x (2h+1) block
// picture: cell (x, y) sits at block (2x+1, 2y+1), the blocks between cells are
// walls or passages, and blocks at even/even positions are always pillars.
// Glyphs: '#' wall, ' ' open, '@' player, 'S' start, 'G' goal, '.' solution,
// '~' fog.

use crate::core::{Cell, Direction, Grid, Maze, MazeError, MazeView, PlayerState};
use crate::models::{GameRenderState, UserAction};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::collections::HashSet;
use std::io;
use std::time::Duration;

const WALL: char = '#';
const OPEN: char = ' ';
const PLAYER: char = '@';
const START: char = 'S';
const GOAL: char = 'G';
const SOLUTION: char = '.';
const FOG: char = '~';

pub fn parse_maze(s: &str) -> Result<(Maze, PlayerState), MazeError> {
    let rows: Vec<Vec<char>> = s
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| line.chars().collect())
        .collect();

    let Some(first) = rows.first() else {
        return Err(MazeError::MalformedLevel("no rows".to_string()));
    };
    let columns = first.len();
    if let Some(y) = rows.iter().position(|row| row.len() != columns) {
        return Err(MazeError::MalformedLevel(format!(
            "row {} has {} columns, expected {}",
            y, rows[y].len(), columns
        )));
    }
    if rows.len() < 3 || rows.len() % 2 == 0 || columns < 3 || columns % 2 == 0 {
        return Err(MazeError::MalformedLevel(format!(
            "a maze picture needs an odd number of rows and columns, got {}x{}",
            columns, rows.len()
        )));
    }

    let width = (columns - 1) / 2;
    let height = (rows.len() - 1) / 2;
    let mut grid = Grid::new(width, height)?;

    let mut start = None;
    let mut player = None;
    let mut goal = None;
    for cell in grid.cells().collect::<Vec<_>>() {
        let (bx, by) = block_of(cell);
        match rows[by][bx] {
            START => start = Some(cell),
            PLAYER => player = Some(cell),
            GOAL => goal = Some(cell),
            _ => {}
        }
        for dir in [Direction::Right, Direction::Down] {
            let next = cell.offset(dir);
            let delta = dir.delta();
            let (wx, wy) = ((bx as i32 + delta.x) as usize, (by as i32 + delta.y) as usize);
            if grid.contains(&next) && rows[wy][wx] != WALL {
                grid.remove_wall(cell, next)?;
            }
        }
    }

    let start = start.or(player).unwrap_or(Cell::new(0, 0));
    let player = player.unwrap_or(start);
    let goal = goal.unwrap_or_else(|| grid.bounds().mirror(&start));
    let maze = Maze::new(grid, start, goal, None)?;
    Ok((maze, PlayerState { position: player }))
}

/// Draws a maze with the player and an optional solution, without fog.
pub fn render_maze_to_string(maze: &Maze, player: Option<Cell>, solution: Option<&[Cell]>) -> String {
    render_blocks(maze, player, solution, None)
}

/// Draws the game as a renderer sees it; with `fog_of_war` only blocks that
/// touch an explored cell are shown.
pub fn render_game_to_string(view: &MazeView, fog_of_war: bool) -> String {
    let explored = if fog_of_war { Some(view.explored) } else { None };
    render_blocks(view.maze, Some(view.player), view.solution, explored)
}

fn render_blocks(
    maze: &Maze,
    player: Option<Cell>,
    solution: Option<&[Cell]>,
    explored: Option<&HashSet<Cell>>,
) -> String {
    let grid = maze.grid();
    let solution = solution.unwrap_or(&[]);
    let solution_cells: HashSet<Cell> = solution.iter().copied().collect();
    let solution_passages: HashSet<(Cell, Cell)> = solution
        .windows(2)
        .map(|pair| (pair[0].min(pair[1]), pair[0].max(pair[1])))
        .collect();

    let block_width = grid.width() * 2 + 1;
    let block_height = grid.height() * 2 + 1;
    let mut result = String::with_capacity((block_width + 1) * block_height);

    for by in 0..block_height {
        for bx in 0..block_width {
            if let Some(explored) = explored {
                if !touches_explored(bx, by, explored) {
                    result.push(FOG);
                    continue;
                }
            }

            let ch = match (bx % 2 == 1, by % 2 == 1) {
                (true, true) => {
                    let cell = Cell::new((bx / 2) as i32, (by / 2) as i32);
                    if Some(cell) == player {
                        PLAYER
                    } else if cell == maze.goal() {
                        GOAL
                    } else if cell == maze.start() {
                        START
                    } else if solution_cells.contains(&cell) {
                        SOLUTION
                    } else {
                        OPEN
                    }
                }
                (false, false) => WALL,
                (false, true) => {
                    let y = (by / 2) as i32;
                    let right = Cell::new((bx / 2) as i32, y);
                    passage_glyph(grid, right.offset(Direction::Left), right, &solution_passages)
                }
                (true, false) => {
                    let x = (bx / 2) as i32;
                    let below = Cell::new(x, (by / 2) as i32);
                    passage_glyph(grid, below.offset(Direction::Up), below, &solution_passages)
                }
            };
            result.push(ch);
        }
        result.push('\n');
    }
    result
}

fn passage_glyph(grid: &Grid, a: Cell, b: Cell, solution_passages: &HashSet<(Cell, Cell)>) -> char {
    match grid.has_wall(a, b) {
        Ok(false) if solution_passages.contains(&(a.min(b), a.max(b))) => SOLUTION,
        Ok(false) => OPEN,
        // the outer border has no cell on one side
        _ => WALL,
    }
}

fn block_of(cell: Cell) -> (usize, usize) {
    ((cell.x * 2 + 1) as usize, (cell.y * 2 + 1) as usize)
}

fn touches_explored(bx: usize, by: usize, explored: &HashSet<Cell>) -> bool {
    let columns = cells_touching(bx);
    let rows = cells_touching(by);
    columns
        .iter()
        .flatten()
        .any(|&x| rows.iter().flatten().any(|&y| explored.contains(&Cell::new(x, y))))
}

// cell coordinates whose block is within one block of `b` along one axis
fn cells_touching(b: usize) -> [Option<i32>; 2] {
    let b = b as i32;
    if b % 2 == 1 {
        [Some(b / 2), None]
    } else {
        [Some(b / 2 - 1), Some(b / 2)]
    }
}

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3), Constraint::Length(3)])
            .split(f.area());

        let (maze_text, title) = match &state.view {
            Some(view) => (
                render_game_to_string(view, state.fog_of_war),
                format!("Maze {}x{}", view.maze.width(), view.maze.height()),
            ),
            None => ("No maze loaded. Press N to generate one.".to_string(), "Maze".to_string()),
        };
        let maze_paragraph = Paragraph::new(maze_text)
            .block(Block::default().borders(Borders::ALL).title(title))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(maze_paragraph, chunks[0]);

        let info_paragraph = Paragraph::new(state.info.clone())
            .block(Block::default().borders(Borders::ALL).title("Maze Info"))
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        f.render_widget(info_paragraph, chunks[1]);

        let instructions = if state.won {
            "You reached the goal! N for a new maze, R to walk it again, Q to quit."
        } else {
            "WASD/arrows move, P solve, R reset, N new maze, F fog, Q quit"
        };

        let instructions = if let Some(message) = &state.message {
            format!("{} | {}", instructions, message)
        } else {
            instructions.to_string()
        };

        let instructions = match &state.last_move {
            Some(result) if !result.moved => format!("{} | Bump!", instructions),
            _ => instructions,
        };

        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[2]);
    })?;
    Ok(())
}

pub enum ConsoleInput {
    UserAction(UserAction),
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input(poll_for: Duration) -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(poll_for)? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Up))
                }
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Down))
                }
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Left))
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Right))
                }
                KeyCode::Char('p') | KeyCode::Char('P') => ConsoleInput::UserAction(UserAction::Solve),
                KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::UserAction(UserAction::ResetPlayer),
                KeyCode::Char('n') | KeyCode::Char('N') => ConsoleInput::UserAction(UserAction::NewMaze),
                KeyCode::Char('f') | KeyCode::Char('F') => ConsoleInput::UserAction(UserAction::ToggleFog),
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}
