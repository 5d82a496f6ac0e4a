use std::{fmt::Display, io::Stdout, path::PathBuf};

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{Terminal, backend::CrosstermBackend};
use sqlx::SqlitePool;
use tracing::info;

use crate::{
    db::models::RoundRecord,
    difficulty::Difficulty,
    round::{Outcome, Round},
    stats::{StatsBook, TOTAL_NAME},
};

use super::types::{LogBuffer, PlayMode, Screen, StatsView};

/// Outcome summary kept for the round-over screen.
#[derive(Debug, Clone, Copy)]
pub(in crate::ui) struct FinishedRound {
    pub difficulty: Difficulty,
    pub outcome: Outcome,
    pub attempts_used: u32,
    pub secret: u32,
}

/// Main application state container.
pub struct App {
    pub(in crate::ui) screen: Screen,
    pub(in crate::ui) input: String,
    pub(in crate::ui) play_mode: PlayMode,
    pub(in crate::ui) player: Option<String>,
    pub(in crate::ui) round: Option<Round>,
    pub(in crate::ui) round_guesses: Vec<u32>,
    pub(in crate::ui) finished: Option<FinishedRound>,
    pub(in crate::ui) min: u32,
    pub(in crate::ui) max: u32,
    pub(in crate::ui) stats: StatsBook,
    pub(in crate::ui) stats_path: PathBuf,
    pub(in crate::ui) stats_view: StatsView,
    pub(in crate::ui) stats_target: String,
    pub(in crate::ui) recent_rounds: Vec<RoundRecord>,
    pub(in crate::ui) logs: LogBuffer,
    pub(in crate::ui) db_pool: SqlitePool,
}

impl App {
    pub fn new(
        min: u32,
        max: u32,
        stats: StatsBook,
        stats_path: PathBuf,
        logs: LogBuffer,
        db_pool: SqlitePool,
    ) -> Self {
        Self {
            screen: Screen::Menu,
            input: String::new(),
            play_mode: PlayMode::Solo,
            player: None,
            round: None,
            round_guesses: Vec::new(),
            finished: None,
            min,
            max,
            stats,
            stats_path,
            stats_view: StatsView::Summary,
            stats_target: TOTAL_NAME.to_string(),
            recent_rounds: Vec::new(),
            logs,
            db_pool,
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        info!("UI started");
        self.log("UI started");

        loop {
            terminal.draw(|f| self.draw(f))?;

            let event = event::read()?;
            if let Event::Key(key) = event {
                if super::handlers::InputHandler::new(self).handle_key(key) {
                    return Ok(());
                }
            }
        }
    }

    pub(in crate::ui) fn log(&self, msg: impl Into<String> + Display) {
        tracing::info!("{}", &msg);
        self.logs.push(msg.into());
    }

    /// Execute an async database operation from sync context
    pub(in crate::ui) fn run_db_operation<F, T>(&self, future: F) -> Result<T>
    where
        F: std::future::Future<Output = Result<T>>,
    {
        tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
    }
}
