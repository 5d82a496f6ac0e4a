//! Round lifecycle: secret acquisition, guesses, recording the result.

use chrono::Utc;

use crate::{
    db::rounds::insert_round,
    difficulty::Difficulty,
    round::{GuessResult, Outcome, Round},
    stats::sheet,
};

use super::super::{
    app::{App, FinishedRound},
    types::{PlayMode, Screen},
};

/// Helper struct for driving a round from start to recorded result.
pub struct RoundHandler<'a> {
    app: &'a mut App,
}

impl<'a> RoundHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn start_round(&mut self, difficulty: Difficulty) {
        let mut round = Round::new(difficulty, self.app.min, self.app.max);
        self.app.round_guesses.clear();
        self.app.finished = None;

        match self.app.play_mode {
            PlayMode::Solo => {
                if let Err(e) = round.draw_secret(&mut rand::rng()) {
                    self.app.log(format!("Failed to start round: {}", e));
                    self.app.screen = Screen::Menu;
                    return;
                }
                self.app
                    .log(format!("Solo round started ({} attempts)", round.budget()));
                self.app.screen = Screen::Guessing;
            }
            PlayMode::TwoPlayer => {
                self.app.log(format!(
                    "Two-player round started ({} attempts); waiting for the secret",
                    round.budget()
                ));
                self.app.screen = Screen::SecretEntry;
            }
        }

        self.app.round = Some(round);
    }

    /// Masked second-party entry. The value is validated upstream, so a
    /// failure here means lifecycle misuse, not bad input.
    pub fn accept_secret(&mut self, secret: u32) {
        let Some(round) = self.app.round.as_mut() else {
            return;
        };

        match round.set_secret(secret) {
            Ok(()) => {
                // Never log the value itself.
                self.app.log("Secret set, guessing begins");
                self.app.screen = Screen::Guessing;
            }
            Err(e) => self.app.log(format!("Could not set secret: {}", e)),
        }
    }

    pub fn submit_guess(&mut self, guess: u32) {
        let Some(round) = self.app.round.as_mut() else {
            return;
        };

        let result = match round.guess(guess) {
            Ok(result) => result,
            Err(e) => {
                self.app.log(format!("Guess rejected: {}", e));
                return;
            }
        };

        self.app.round_guesses.push(guess);

        match result {
            GuessResult::Correct => {
                self.app.log(format!("Correct! The secret was {}", guess));
                self.finish_round();
            }
            GuessResult::Wrong { remaining: 0 } => {
                self.app.log("Out of attempts");
                self.finish_round();
            }
            GuessResult::Wrong { remaining } => {
                self.app
                    .log(format!("{} is not it, {} attempts left", guess, remaining));
            }
        }
    }

    fn finish_round(&mut self) {
        let Some(round) = self.app.round.take() else {
            return;
        };
        let Some(outcome) = round.outcome() else {
            self.app.round = Some(round);
            return;
        };
        let Some(player) = self.app.player.clone() else {
            self.app.log("No player for this round; result discarded");
            return;
        };

        let difficulty = round.difficulty();
        let won = outcome == Outcome::Won;

        if let Err(e) = self.app.stats.record_outcome(&player, difficulty, outcome) {
            self.app.log(format!("Failed to record result: {}", e));
        } else if let Err(e) = sheet::save(&self.app.stats, &self.app.stats_path) {
            // Flush after every result so an abrupt exit loses nothing.
            self.app.log(format!("Failed to persist stats: {}", e));
        }

        let secret = round.revealed_secret().unwrap_or_default();

        let db_result = self.app.run_db_operation(insert_round(
            &self.app.db_pool,
            Utc::now(),
            &player,
            difficulty,
            secret,
            round.attempts_used(),
            outcome.into(),
        ));
        if let Err(e) = db_result {
            self.app.log(format!("Failed to record round history: {}", e));
        }

        tracing::info!(
            player = %player,
            difficulty = %difficulty,
            attempts = round.attempts_used(),
            won,
            "round finished"
        );

        self.app.finished = Some(FinishedRound {
            difficulty,
            outcome,
            attempts_used: round.attempts_used(),
            secret,
        });
        self.app.screen = Screen::RoundOver;
    }
}
