//! Input field rendering with validation status.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    input::{Validation, normalize_yes_no, validate_number},
    stats::TOTAL_NAME,
};

use crate::ui::{
    app::App,
    types::{InputStatus, Screen},
};

impl App {
    pub(in crate::ui) fn draw_input(&self, f: &mut Frame, area: Rect, title: &str, masked: bool) {
        let status = self.input_status();

        let (border_color, subtitle) = match status {
            InputStatus::Incomplete => (Color::Gray, ""),
            InputStatus::Valid => (Color::Green, ""),
            InputStatus::Invalid(msg) => (Color::Red, msg),
        };

        let shown = if masked {
            "*".repeat(self.input.chars().count())
        } else {
            self.input.clone()
        };
        let text = format!("{}▌", shown);

        let full_title = if subtitle.is_empty() {
            format!("{} | Enter = submit | Esc = menu | Ctrl+Q = quit", title)
        } else {
            format!(
                "{} ({}) | Enter = submit | Esc = menu | Ctrl+Q = quit",
                title, subtitle
            )
        };

        f.render_widget(
            Paragraph::new(text).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color))
                    .title(full_title),
            ),
            area,
        );
    }

    pub(in crate::ui) fn input_status(&self) -> InputStatus {
        match self.screen {
            Screen::Menu => from_validation(validate_number(&self.input, 1, 4)),
            Screen::DifficultySelect => from_validation(validate_number(&self.input, 1, 3)),
            Screen::SecretEntry | Screen::Guessing => {
                from_validation(validate_number(&self.input, self.min, self.max))
            }
            Screen::PlayerEntry => {
                let name = self.input.trim();
                if name.is_empty() {
                    InputStatus::Incomplete
                } else if name == TOTAL_NAME {
                    InputStatus::Invalid("'total' is reserved")
                } else {
                    InputStatus::Valid
                }
            }
            Screen::RoundOver => {
                if self.input.trim().is_empty() {
                    InputStatus::Incomplete
                } else if normalize_yes_no(&self.input).is_some() {
                    InputStatus::Valid
                } else {
                    InputStatus::Invalid("answer 'yes' or 'no'")
                }
            }
            Screen::Stats => {
                let name = self.input.trim();
                if name.is_empty() {
                    InputStatus::Incomplete
                } else if self.stats.contains(name) {
                    InputStatus::Valid
                } else {
                    InputStatus::Invalid("unknown player")
                }
            }
        }
    }
}

fn from_validation(validation: Validation) -> InputStatus {
    match validation {
        Validation::Incomplete => InputStatus::Incomplete,
        Validation::Invalid(msg) => InputStatus::Invalid(msg),
        Validation::Valid(_) => InputStatus::Valid,
    }
}
