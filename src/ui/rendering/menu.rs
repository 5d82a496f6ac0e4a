//! Main menu, player entry and difficulty selection screens.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::{difficulty::Difficulty, ui::app::App, ui::types::PlayMode};

fn numbered_list<'a>(items: Vec<String>) -> List<'a> {
    List::new(
        items
            .into_iter()
            .map(|text| ListItem::new(Line::from(text)))
            .collect::<Vec<_>>(),
    )
}

impl App {
    pub(in crate::ui) fn draw_menu(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(6), Constraint::Length(3)])
            .split(area);

        let list = numbered_list(vec![
            "1. Solo round".to_string(),
            "2. Two-player round".to_string(),
            "3. Statistics".to_string(),
            "4. Exit".to_string(),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    "adivina — guess the number",
                    Style::default().add_modifier(Modifier::BOLD),
                )),
        );
        f.render_widget(list, chunks[0]);

        self.draw_input(f, chunks[1], "Menu choice (1-4)", false);
    }

    pub(in crate::ui) fn draw_player_entry(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(4), Constraint::Length(3)])
            .split(area);

        let mode_line = match self.play_mode {
            PlayMode::Solo => "Solo round: the machine picks the secret.",
            PlayMode::TwoPlayer => "Two-player round: the other player will enter the secret.",
        };

        let text = vec![
            Line::from(mode_line),
            Line::from(""),
            Line::from("Who is guessing? A new name starts with zeroed counters."),
        ];
        f.render_widget(
            Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("New round")),
            chunks[0],
        );

        self.draw_input(f, chunks[1], "Player name", false);
    }

    pub(in crate::ui) fn draw_difficulty_select(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(3)])
            .split(area);

        let items = Difficulty::ALL
            .iter()
            .enumerate()
            .map(|(i, d)| format!("{}. {} ({} attempts)", i + 1, d.label(), d.attempt_budget()))
            .collect();

        let list = numbered_list(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Difficulty")
                .border_style(Style::default().fg(Color::Cyan)),
        );
        f.render_widget(list, chunks[0]);

        self.draw_input(f, chunks[1], "Difficulty (1-3)", false);
    }
}
