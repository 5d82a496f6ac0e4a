use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::difficulty::Difficulty;
use crate::round::Outcome;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RoundOutcome {
    Won,
    Lost,
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RoundOutcome::Won => "won",
            RoundOutcome::Lost => "lost",
        };
        write!(f, "{}", s)
    }
}

impl RoundOutcome {
    pub fn from_string(s: &str) -> Option<Self> {
        match s {
            "won" => Some(RoundOutcome::Won),
            "lost" => Some(RoundOutcome::Lost),
            _ => None,
        }
    }
}

impl From<Outcome> for RoundOutcome {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Won => RoundOutcome::Won,
            Outcome::Lost => RoundOutcome::Lost,
        }
    }
}

/// Represents one completed round in the database
#[derive(Debug, Clone)]
pub struct RoundRecord {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub player: String,
    pub difficulty: Difficulty,
    pub secret: i64,
    pub attempts_used: i64,
    pub outcome: RoundOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_text_round_trip() {
        assert!(matches!(
            RoundOutcome::from_string(&RoundOutcome::Won.to_string()),
            Some(RoundOutcome::Won)
        ));
        assert!(matches!(
            RoundOutcome::from_string(&RoundOutcome::Lost.to_string()),
            Some(RoundOutcome::Lost)
        ));
        assert!(RoundOutcome::from_string("abandoned").is_none());
    }
}
