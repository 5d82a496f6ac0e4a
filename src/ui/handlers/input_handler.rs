//! Keyboard input dispatch: one submit path per screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    difficulty::Difficulty,
    input::{Validation, normalize_yes_no, validate_number},
    stats::TOTAL_NAME,
};

use super::super::{
    app::App,
    types::{PlayMode, Screen},
};
use super::{RoundHandler, StatsHandler};

/// Helper struct for managing keyboard input and user interactions.
pub struct InputHandler<'a> {
    app: &'a mut App,
}

impl<'a> InputHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Returns `true` when the application should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char('q' | 'Q'), KeyModifiers::CONTROL) => {
                self.app.log("Exit requested");
                return true;
            }

            (KeyCode::Esc, _) => {
                if self.app.screen != Screen::Menu {
                    self.app.log("Returning to menu");
                    self.abandon_to_menu();
                }
            }

            (KeyCode::Tab, _) => {
                if self.app.screen == Screen::Stats {
                    StatsHandler::new(self.app).cycle_view();
                }
            }

            (KeyCode::Enter, _) => return self.submit_input(),
            (KeyCode::Backspace, _) => {
                self.app.input.pop();
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.app.input.push(c);
            }
            _ => {}
        }
        false
    }

    fn abandon_to_menu(&mut self) {
        // An unfinished round is simply dropped; nothing is recorded.
        self.app.screen = Screen::Menu;
        self.app.round = None;
        self.app.round_guesses.clear();
        self.app.finished = None;
        self.app.input.clear();
    }

    fn submit_input(&mut self) -> bool {
        match self.app.screen {
            Screen::Menu => return self.submit_menu_choice(),
            Screen::PlayerEntry => self.submit_player_name(),
            Screen::DifficultySelect => self.submit_difficulty_choice(),
            Screen::SecretEntry => self.submit_secret(),
            Screen::Guessing => self.submit_guess(),
            Screen::RoundOver => return self.submit_round_over_answer(),
            Screen::Stats => StatsHandler::new(self.app).submit_target(),
        }
        false
    }

    fn submit_menu_choice(&mut self) -> bool {
        let Validation::Valid(choice) = validate_number(&self.app.input, 1, 4) else {
            return false;
        };
        self.app.input.clear();

        match choice {
            1 => {
                self.app.log("Solo round selected");
                self.app.play_mode = PlayMode::Solo;
                self.app.screen = Screen::PlayerEntry;
            }
            2 => {
                self.app.log("Two-player round selected");
                self.app.play_mode = PlayMode::TwoPlayer;
                self.app.screen = Screen::PlayerEntry;
            }
            3 => {
                self.app.log("Statistics selected");
                StatsHandler::new(self.app).enter_stats_screen();
            }
            _ => {
                self.app.log("Exit requested");
                return true;
            }
        }
        false
    }

    fn submit_player_name(&mut self) {
        let name = self.app.input.trim().to_string();
        if name.is_empty() || name == TOTAL_NAME {
            return;
        }

        if !self.app.stats.contains(&name) {
            self.app.stats.initialize(&name);
            self.app.log(format!("New player '{}' registered", name));
        }

        self.app.log(format!("Guesser is '{}'", name));
        self.app.player = Some(name);
        self.app.input.clear();
        self.app.screen = Screen::DifficultySelect;
    }

    fn submit_difficulty_choice(&mut self) {
        let Validation::Valid(choice) = validate_number(&self.app.input, 1, 3) else {
            return;
        };
        let Some(difficulty) = Difficulty::from_menu_choice(choice) else {
            return;
        };

        self.app.input.clear();
        RoundHandler::new(self.app).start_round(difficulty);
    }

    fn submit_secret(&mut self) {
        let Validation::Valid(secret) = validate_number(&self.app.input, self.app.min, self.app.max)
        else {
            return;
        };

        self.app.input.clear();
        RoundHandler::new(self.app).accept_secret(secret);
    }

    fn submit_guess(&mut self) {
        let Validation::Valid(guess) = validate_number(&self.app.input, self.app.min, self.app.max)
        else {
            return;
        };

        self.app.input.clear();
        RoundHandler::new(self.app).submit_guess(guess);
    }

    fn submit_round_over_answer(&mut self) -> bool {
        let Some(answer) = normalize_yes_no(&self.app.input) else {
            return false;
        };

        self.app.input.clear();
        if answer == "yes" {
            self.app.log("Back to menu");
            self.abandon_to_menu();
            false
        } else {
            self.app.log("Exit requested");
            true
        }
    }
}
