use serde::{Deserialize, Serialize};

/// Game difficulty, fixing the attempt budget for a round.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Number of guesses a round at this difficulty allows.
    pub fn attempt_budget(self) -> u32 {
        match self {
            Difficulty::Easy => 20,
            Difficulty::Medium => 12,
            Difficulty::Hard => 5,
        }
    }

    /// Label used in the persisted workbook and on screen.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Fácil",
            Difficulty::Medium => "Medio",
            Difficulty::Hard => "Difícil",
        }
    }

    /// Map a difficulty sub-menu choice (1-3) to a difficulty.
    pub fn from_menu_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(Difficulty::Easy),
            2 => Some(Difficulty::Medium),
            3 => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{}", s)
    }
}

impl Difficulty {
    pub fn from_string(s: &str) -> Option<Self> {
        match s {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// Statistics category: the three difficulties plus the aggregate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bucket {
    Easy,
    Medium,
    Hard,
    All,
}

impl Bucket {
    pub const ALL: [Bucket; 4] = [Bucket::Easy, Bucket::Medium, Bucket::Hard, Bucket::All];

    pub fn label(self) -> &'static str {
        match self {
            Bucket::Easy => "Fácil",
            Bucket::Medium => "Medio",
            Bucket::Hard => "Difícil",
            Bucket::All => "All",
        }
    }
}

impl From<Difficulty> for Bucket {
    fn from(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Bucket::Easy,
            Difficulty::Medium => Bucket::Medium,
            Difficulty::Hard => Bucket::Hard,
        }
    }
}
