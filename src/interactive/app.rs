//! TUI application state and logic

use crate::core::Coord;
use crate::session::{
    PuzzleSession, Round, RoundState, SelectionResult, Statistics, SubmitOutcome,
};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub session: PuzzleSession<StdRng>,
    pub cursor: Coord,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    WinCelebration,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Cursor movement on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl App {
    /// Wrap a session; a round is generated here if the session has none
    ///
    /// # Errors
    ///
    /// Returns an error if the first round cannot be generated.
    pub fn new(mut session: PuzzleSession<StdRng>) -> Result<Self> {
        if session.round().is_none() {
            session.new_round()?;
        }

        Ok(Self {
            session,
            cursor: Coord::new(0, 0),
            messages: vec![
                Message {
                    text: "Find every word! Chain adjacent cells, diagonals included.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Arrows move, Space selects, Enter/s submits.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Playing,
        })
    }

    /// Move the cursor one cell, stopping at the edges
    pub fn move_cursor(&mut self, direction: Direction) {
        let last = self.session.config().grid_size.saturating_sub(1);
        let Coord { row, col } = self.cursor;
        self.cursor = match direction {
            Direction::Up => Coord::new(row.saturating_sub(1), col),
            Direction::Down => Coord::new((row + 1).min(last), col),
            Direction::Left => Coord::new(row, col.saturating_sub(1)),
            Direction::Right => Coord::new(row, (col + 1).min(last)),
        };
    }

    /// Toggle the cell under the cursor
    pub fn toggle_cursor(&mut self) {
        let Coord { row, col } = self.cursor;
        match self.session.select_cell(row, col) {
            Ok(SelectionResult::Added | SelectionResult::Removed) => {}
            Ok(SelectionResult::NotAdjacent) => {
                self.add_message("Pick a cell next to the last one!", MessageStyle::Error);
            }
            Ok(SelectionResult::OutOfBounds) => {
                self.add_message("That cell is off the board.", MessageStyle::Error);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Drop the whole selection
    pub fn clear_selection(&mut self) {
        if let Err(err) = self.session.clear_selection() {
            self.add_message(&err.to_string(), MessageStyle::Error);
        }
    }

    pub fn submit(&mut self) {
        let candidate = self
            .session
            .round()
            .map(Round::candidate)
            .unwrap_or_default();

        let outcome = match self.session.submit() {
            Ok(outcome) => outcome,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };
        self.stats.record(outcome);

        match outcome {
            SubmitOutcome::CorrectNew => {
                self.add_message(&format!("Found {candidate}!"), MessageStyle::Success);
            }
            SubmitOutcome::CorrectDuplicate => {
                self.add_message(
                    &format!("{candidate} was already found."),
                    MessageStyle::Info,
                );
            }
            SubmitOutcome::Incorrect => {
                let shown = if candidate.is_empty() {
                    "Nothing selected"
                } else {
                    candidate.as_str()
                };
                self.add_message(
                    &format!("{shown} is not one of the words."),
                    MessageStyle::Error,
                );
            }
            SubmitOutcome::RoundWon => {
                self.input_mode = InputMode::WinCelebration;
                self.add_message("🎉 You found every word! 🎉", MessageStyle::Success);
                self.add_message("Press 'n' for a new puzzle or 'q' to quit.", MessageStyle::Info);
            }
            SubmitOutcome::RoundLost => {
                self.cursor = Coord::new(0, 0);
                self.add_message(
                    "Out of attempts! Here's a fresh puzzle.",
                    MessageStyle::Error,
                );
            }
        }
    }

    pub fn new_round(&mut self) {
        match self.session.new_round() {
            Ok(_) => {
                self.messages.clear();
                self.cursor = Coord::new(0, 0);
                self.input_mode = InputMode::Playing;
                self.add_message("New puzzle generated!", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::WinCelebration => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_round(),
                _ => {}
            },
            InputMode::Playing => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Up | KeyCode::Char('k') => self.move_cursor(Direction::Up),
                KeyCode::Down | KeyCode::Char('j') => self.move_cursor(Direction::Down),
                KeyCode::Left | KeyCode::Char('h') => self.move_cursor(Direction::Left),
                KeyCode::Right | KeyCode::Char('l') => self.move_cursor(Direction::Right),
                KeyCode::Char(' ') => self.toggle_cursor(),
                KeyCode::Enter | KeyCode::Char('s') => self.submit(),
                KeyCode::Char('c') | KeyCode::Backspace => self.clear_selection(),
                KeyCode::Char('n') => self.new_round(),
                _ => {}
            },
        }
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.session.state() == RoundState::Playing
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
