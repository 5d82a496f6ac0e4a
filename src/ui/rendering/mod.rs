mod input_field;
mod logs;
mod menu;
mod round;
mod stats;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::ui::{app::App, types::Screen};

impl App {
    pub(in crate::ui) fn draw(&self, f: &mut Frame) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(10),   // Screen content
                Constraint::Length(6), // Log panel
            ])
            .split(f.area());

        match self.screen {
            Screen::Menu => self.draw_menu(f, layout[0]),
            Screen::PlayerEntry => self.draw_player_entry(f, layout[0]),
            Screen::DifficultySelect => self.draw_difficulty_select(f, layout[0]),
            Screen::SecretEntry | Screen::Guessing => self.draw_round(f, layout[0]),
            Screen::RoundOver => self.draw_round_over(f, layout[0]),
            Screen::Stats => self.draw_stats(f, layout[0]),
        }

        self.draw_logs(f, layout[1]);
    }
}
