//! Statistics screen state: view cycling and report targeting.

use crate::db::rounds::recent_rounds;
use crate::stats::TOTAL_NAME;

use super::super::{app::App, types::Screen};

const HISTORY_LIMIT: i64 = 20;

/// Helper struct for the statistics screen.
pub struct StatsHandler<'a> {
    app: &'a mut App,
}

impl<'a> StatsHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn enter_stats_screen(&mut self) {
        self.app.stats_target = TOTAL_NAME.to_string();
        self.app.screen = Screen::Stats;
        self.reload_history();
    }

    pub fn cycle_view(&mut self) {
        self.app.stats_view = self.app.stats_view.next();
        self.app.log(format!("Stats view: {:?}", self.app.stats_view));
    }

    /// Retarget the views at the typed player name. Unknown names are
    /// rejected so a typo cannot silently show an empty record.
    pub fn submit_target(&mut self) {
        let name = self.app.input.trim().to_string();
        if name.is_empty() {
            return;
        }

        if !self.app.stats.contains(&name) {
            self.app.log(format!("Unknown player '{}'", name));
            return;
        }

        self.app.log(format!("Showing statistics for '{}'", name));
        self.app.stats_target = name;
        self.app.input.clear();
    }

    fn reload_history(&mut self) {
        let result = self
            .app
            .run_db_operation(recent_rounds(&self.app.db_pool, HISTORY_LIMIT));
        match result {
            Ok(rounds) => self.app.recent_rounds = rounds,
            Err(e) => {
                self.app.log(format!("Failed to load round history: {}", e));
                self.app.recent_rounds.clear();
            }
        }
    }
}
