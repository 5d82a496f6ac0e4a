//! One guessing round: secret acquisition, attempt accounting, outcome.

use anyhow::Result;
use rand::Rng;

use crate::difficulty::Difficulty;

/// Terminal result of a round.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// Round lifecycle. `Won` and `Lost` are terminal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RoundState {
    AwaitingSecret,
    Guessing,
    Won,
    Lost,
}

/// What a single guess produced.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GuessResult {
    Correct,
    Wrong { remaining: u32 },
}

#[derive(Debug)]
pub struct Round {
    difficulty: Difficulty,
    min: u32,
    max: u32,
    secret: Option<u32>,
    attempts_used: u32,
    state: RoundState,
}

impl Round {
    pub fn new(difficulty: Difficulty, min: u32, max: u32) -> Self {
        Self {
            difficulty,
            min,
            max,
            secret: None,
            attempts_used: 0,
            state: RoundState::AwaitingSecret,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn bounds(&self) -> (u32, u32) {
        (self.min, self.max)
    }

    pub fn budget(&self) -> u32 {
        self.difficulty.attempt_budget()
    }

    pub fn attempts_used(&self) -> u32 {
        self.attempts_used
    }

    pub fn attempts_remaining(&self) -> u32 {
        self.budget() - self.attempts_used
    }

    /// Supply the secret from a second party (two-player mode).
    pub fn set_secret(&mut self, secret: u32) -> Result<()> {
        if self.state != RoundState::AwaitingSecret {
            anyhow::bail!("secret already set");
        }
        if secret < self.min || secret > self.max {
            anyhow::bail!("secret {} outside [{}, {}]", secret, self.min, self.max);
        }
        self.secret = Some(secret);
        self.state = RoundState::Guessing;
        Ok(())
    }

    /// Draw the secret uniformly over the round's range (solo mode).
    pub fn draw_secret<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        let secret = rng.random_range(self.min..=self.max);
        self.set_secret(secret)
    }

    /// Consume one attempt. Callers must pass a value already validated to
    /// be inside the round's range.
    pub fn guess(&mut self, value: u32) -> Result<GuessResult> {
        if self.state != RoundState::Guessing {
            anyhow::bail!("round is not accepting guesses");
        }

        let secret = self
            .secret
            .ok_or_else(|| anyhow::anyhow!("guessing state without a secret"))?;

        self.attempts_used += 1;

        if value == secret {
            self.state = RoundState::Won;
            return Ok(GuessResult::Correct);
        }

        let remaining = self.budget() - self.attempts_used;
        if remaining == 0 {
            self.state = RoundState::Lost;
        }

        Ok(GuessResult::Wrong { remaining })
    }

    /// The secret, revealed only once the round is over.
    pub fn revealed_secret(&self) -> Option<u32> {
        match self.state {
            RoundState::Won | RoundState::Lost => self.secret,
            _ => None,
        }
    }

    /// `Some` once the round reached a terminal state.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            RoundState::Won => Some(Outcome::Won),
            RoundState::Lost => Some(Outcome::Lost),
            _ => None,
        }
    }
}
