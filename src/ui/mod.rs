mod app;
mod handlers;
mod rendering;
mod types;

pub use app::App;
pub use types::{LogBuffer, PlayMode, Screen, StatsView};

use std::path::PathBuf;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use sqlx::SqlitePool;
use std::io::stdout;

use crate::stats::StatsBook;

/// Entry point for running the UI.
pub fn run_ui(
    min: u32,
    max: u32,
    stats: StatsBook,
    stats_path: PathBuf,
    db_pool: SqlitePool,
) -> Result<()> {
    let logs = LogBuffer::new();
    let mut app = App::new(min, max, stats, stats_path, logs, db_pool);

    let mut stdout = stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
