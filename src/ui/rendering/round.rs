//! In-round and round-over screens.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::{
    input::{guess_prompt_text, prompt_text},
    round::Outcome,
    ui::app::App,
    ui::types::Screen,
};

impl App {
    pub(in crate::ui) fn draw_round(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Round status
                Constraint::Min(4),    // Guesses so far
                Constraint::Length(3), // Input
            ])
            .split(area);

        self.draw_round_status(f, chunks[0]);
        self.draw_round_guesses(f, chunks[1]);

        match self.screen {
            Screen::SecretEntry => {
                let title = format!("Secret — {}", prompt_text(self.min, self.max));
                self.draw_input(f, chunks[2], &title, true);
            }
            _ => {
                let (attempt, budget) = match &self.round {
                    Some(round) => (round.attempts_used() + 1, round.budget()),
                    None => (1, 0),
                };
                let title = guess_prompt_text(self.min, self.max, attempt, budget);
                self.draw_input(f, chunks[2], &title, false);
            }
        }
    }

    fn draw_round_status(&self, f: &mut Frame, area: Rect) {
        let player = self.player.as_deref().unwrap_or("?");

        let lines = match &self.round {
            Some(round) => vec![
                Line::from(format!(
                    "Player: {}   Difficulty: {}",
                    player,
                    round.difficulty().label()
                )),
                Line::from(format!(
                    "Attempts: {} used, {} remaining",
                    round.attempts_used(),
                    round.attempts_remaining()
                )),
            ],
            None => vec![Line::from("No round in progress")],
        };

        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Round")),
            area,
        );
    }

    fn draw_round_guesses(&self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .round_guesses
            .iter()
            .enumerate()
            .map(|(i, guess)| ListItem::new(Line::from(format!("{:>3}. {}", i + 1, guess))))
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Guesses ({})", self.round_guesses.len())),
        );
        f.render_widget(list, area);
    }

    pub(in crate::ui) fn draw_round_over(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(3)])
            .split(area);

        let lines = match self.finished {
            Some(finished) => {
                let (headline, color) = match finished.outcome {
                    Outcome::Won => ("You won!", Color::Green),
                    Outcome::Lost => ("You lost.", Color::Red),
                };
                vec![
                    Line::from(Span::styled(
                        headline,
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(""),
                    Line::from(format!(
                        "The secret was {}. {} attempts used on {}.",
                        finished.secret,
                        finished.attempts_used,
                        finished.difficulty.label()
                    )),
                ]
            }
            None => vec![Line::from("No round finished")],
        };

        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Round over")),
            chunks[0],
        );

        self.draw_input(f, chunks[1], "Back to the menu? (yes or no)", false);
    }
}
