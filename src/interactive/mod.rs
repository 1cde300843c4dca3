//! Interactive TUI mode
//!
//! Cursor-driven board built on ratatui.

pub mod app;
pub mod rendering;

pub use app::{App, run_tui};
