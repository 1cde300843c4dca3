//! TUI rendering with ratatui
//!
//! Board, target list and status panels for the word hunt.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Coord;
use crate::session::Round;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(14),   // Main content
            Constraint::Length(3), // Selection
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    let Some(round) = app.session.round() else {
        return;
    };

    render_board(f, app, round, main_chunks[0]);
    render_info_panel(f, app, round, main_chunks[1]);
    render_selection(f, app, round, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔎 WORD HUNT")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Style for one board cell; the cursor is layered over the other marks
fn cell_style(app: &App, round: &Round, coord: Coord) -> Style {
    let base = if round.selection().contains(coord) {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else if round.correct_coordinates().contains(&coord) {
        Style::default().fg(Color::Black).bg(Color::Green)
    } else {
        Style::default().fg(Color::White)
    };

    if coord == app.cursor && app.input_mode == InputMode::Playing {
        base.add_modifier(Modifier::REVERSED | Modifier::UNDERLINED)
    } else {
        base
    }
}

fn render_board(f: &mut Frame, app: &App, round: &Round, area: Rect) {
    let grid = round.grid();
    let mut lines = Vec::with_capacity(grid.size() + 1);

    let header: String = (0..grid.size()).map(|col| format!("{col:>2} ")).collect();
    lines.push(Line::from(Span::styled(
        format!("    {header}"),
        Style::default().fg(Color::DarkGray),
    )));

    for (row, cells) in grid.rows().enumerate() {
        let mut spans = vec![Span::styled(
            format!("{row:>2}  "),
            Style::default().fg(Color::DarkGray),
        )];
        for (col, &letter) in cells.iter().enumerate() {
            spans.push(Span::styled(
                format!(" {letter} "),
                cell_style(app, round, Coord::new(row, col)),
            ));
        }
        lines.push(Line::from(spans));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, round: &Round, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(7),    // Words
            Constraint::Length(3), // Attempts gauge
            Constraint::Length(7), // Messages
        ])
        .split(area);

    render_words(f, round, chunks[0]);
    render_attempts(f, app, round, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_words(f: &mut Frame, round: &Round, area: Rect) {
    let items: Vec<ListItem> = round
        .targets()
        .iter()
        .map(|word| {
            if round.is_found(word) {
                ListItem::new(format!("✓ {word}")).style(
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::CROSSED_OUT),
                )
            } else {
                ListItem::new(format!("• {word}"))
            }
        })
        .collect();

    let title = format!(
        " Words {}/{} ",
        round.found().len(),
        round.targets().len()
    );
    let words = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(words, area);
}

fn render_attempts(f: &mut Frame, app: &App, round: &Round, area: Rect) {
    let max = app.session.config().max_attempts;
    let remaining = round.attempts_remaining().min(max);
    let percent = if max == 0 {
        0
    } else {
        u16::try_from(remaining * 100 / max).unwrap_or(100)
    };

    let color = match remaining {
        0 | 1 => Color::Red,
        2 => Color::Yellow,
        _ => Color::Cyan,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{remaining}/{max} left"));
    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_selection(f: &mut Frame, app: &App, round: &Round, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::WinCelebration => (
            " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for a new puzzle or 'q' to quit ",
            String::new(),
            Color::Green,
        ),
        InputMode::Playing => (
            " Selection | Space: pick  Enter: submit  c: clear ",
            round.candidate(),
            Color::Yellow,
        ),
    };

    let selection = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(selection, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let round_text = format!("Round {}", app.session.rounds_started());
    f.render_widget(
        Paragraph::new(round_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Won: {} | Lost: {} | Win Rate: {:.0}%",
        app.stats.rounds_won,
        app.stats.rounds_lost,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = if app.is_playing() {
        "←↑↓→/hjkl: Move | Space: Pick | s: Submit | n: New | q: Quit"
    } else {
        "n: New Puzzle | q: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::Grid;
    use crate::session::PuzzleSession;
    use crate::wordlists::Vocabulary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn app() -> App {
        let config = GameConfig::new(4, 3, 2);
        let vocabulary = Vocabulary::new(["CAT", "DOG", "PIG"], 4).unwrap();
        let grid = Grid::from_rows(&["CATX", "XXDX", "XXOX", "XXGX"]).unwrap();
        let session = PuzzleSession::with_round(
            config,
            vocabulary,
            StdRng::seed_from_u64(3),
            grid,
            vec!["CAT".to_string(), "DOG".to_string()],
        )
        .unwrap();
        App::new(session).unwrap()
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn draws_targets_and_attempts() {
        let text = screen(&app());
        assert!(text.contains("CAT"));
        assert!(text.contains("DOG"));
        assert!(text.contains("3/3 left"));
        assert!(text.contains("Words 0/2"));
    }

    #[test]
    fn selected_cell_is_highlighted() {
        let mut app = app();
        app.toggle_cursor();
        let round = app.session.round().unwrap();
        let style = cell_style(&app, round, Coord::new(0, 0));
        assert_eq!(style.bg, Some(Color::Yellow));

        let other = cell_style(&app, round, Coord::new(3, 3));
        assert_eq!(other.bg, None);
    }

    #[test]
    fn found_cells_turn_green() {
        let mut app = app();
        for col in 0..3 {
            app.cursor = Coord::new(0, col);
            app.toggle_cursor();
        }
        app.submit();

        let round = app.session.round().unwrap();
        assert_eq!(cell_style(&app, round, Coord::new(0, 1)).bg, Some(Color::Green));
        assert!(screen(&app).contains("Words 1/2"));
    }
}
