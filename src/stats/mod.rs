//! Per-player win/loss counters and the reserved `total` aggregate.

pub mod sheet;

use std::collections::BTreeMap;

use anyhow::Result;

use crate::difficulty::{Bucket, Difficulty};
use crate::round::Outcome;

/// Name of the aggregate record summing every player.
pub const TOTAL_NAME: &str = "total";

/// One bucket's counters. `won` never exceeds `played`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct BucketCounters {
    pub played: u64,
    pub won: u64,
}

/// Counters for one player across the four buckets.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    easy: BucketCounters,
    medium: BucketCounters,
    hard: BucketCounters,
    all: BucketCounters,
}

impl PlayerRecord {
    pub fn bucket(&self, bucket: Bucket) -> BucketCounters {
        match bucket {
            Bucket::Easy => self.easy,
            Bucket::Medium => self.medium,
            Bucket::Hard => self.hard,
            Bucket::All => self.all,
        }
    }

    fn bucket_mut(&mut self, bucket: Bucket) -> &mut BucketCounters {
        match bucket {
            Bucket::Easy => &mut self.easy,
            Bucket::Medium => &mut self.medium,
            Bucket::Hard => &mut self.hard,
            Bucket::All => &mut self.all,
        }
    }

    fn apply(&mut self, difficulty: Difficulty, won: bool) {
        for bucket in [Bucket::from(difficulty), Bucket::All] {
            let counters = self.bucket_mut(bucket);
            counters.played += 1;
            if won {
                counters.won += 1;
            }
        }
    }
}

/// The statistics store: player name → record, plus the `total` aggregate.
///
/// `total` always equals the element-wise sum of every player record; both
/// are updated on the single mutation path, `record_result`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsBook {
    records: BTreeMap<String, PlayerRecord>,
}

impl StatsBook {
    pub fn new() -> Self {
        let mut records = BTreeMap::new();
        records.insert(TOTAL_NAME.to_string(), PlayerRecord::default());
        Self { records }
    }

    /// Create a zeroed record for `player` if absent. Idempotent: an
    /// existing record is left untouched.
    pub fn initialize(&mut self, player: &str) {
        self.records.entry(player.to_string()).or_default();
    }

    pub fn contains(&self, player: &str) -> bool {
        self.records.contains_key(player)
    }

    pub fn player(&self, name: &str) -> Option<&PlayerRecord> {
        self.records.get(name)
    }

    /// Player names in the book, `total` included.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Record one completed round for `player`. Fails on a name that was
    /// never initialized; the `total` aggregate is updated in the same call.
    pub fn record_result(&mut self, player: &str, difficulty: Difficulty, won: bool) -> Result<()> {
        if player == TOTAL_NAME {
            anyhow::bail!("'{}' is the aggregate record, not a player", TOTAL_NAME);
        }

        let record = self
            .records
            .get_mut(player)
            .ok_or_else(|| anyhow::anyhow!("unknown player '{}'", player))?;
        record.apply(difficulty, won);

        self.records
            .get_mut(TOTAL_NAME)
            .ok_or_else(|| anyhow::anyhow!("aggregate record missing"))?
            .apply(difficulty, won);

        Ok(())
    }

    /// Convenience wrapper over `record_result` for a round outcome.
    pub fn record_outcome(&mut self, player: &str, difficulty: Difficulty, outcome: Outcome) -> Result<()> {
        self.record_result(player, difficulty, outcome == Outcome::Won)
    }

    /// Human-readable report: one line per bucket, plus a header.
    pub fn describe(&self, name: &str) -> Result<String> {
        let record = self
            .player(name)
            .ok_or_else(|| anyhow::anyhow!("unknown player '{}'", name))?;

        let mut out = format!("Player: {}", name);
        for bucket in Bucket::ALL {
            let counters = record.bucket(bucket);
            out.push_str(&format!(
                "\n{:>8}: {} played, {} won",
                bucket.label(),
                counters.played,
                counters.won
            ));
        }
        Ok(out)
    }

    /// Per-bucket `(won, played)` extract for the bar-chart renderer.
    pub fn chart_rows(&self, name: &str) -> Result<[(Bucket, BucketCounters); 4]> {
        let record = self
            .player(name)
            .ok_or_else(|| anyhow::anyhow!("unknown player '{}'", name))?;

        Ok(Bucket::ALL.map(|bucket| (bucket, record.bucket(bucket))))
    }
}

impl Default for StatsBook {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invariants(record: &PlayerRecord) {
        for bucket in Bucket::ALL {
            let c = record.bucket(bucket);
            assert!(c.won <= c.played, "won > played in {:?}", bucket);
        }
        let sum_played: u64 = [Bucket::Easy, Bucket::Medium, Bucket::Hard]
            .iter()
            .map(|&b| record.bucket(b).played)
            .sum();
        let sum_won: u64 = [Bucket::Easy, Bucket::Medium, Bucket::Hard]
            .iter()
            .map(|&b| record.bucket(b).won)
            .sum();
        assert_eq!(record.bucket(Bucket::All).played, sum_played);
        assert_eq!(record.bucket(Bucket::All).won, sum_won);
    }

    #[test]
    fn test_new_book_has_zeroed_total() {
        let book = StatsBook::new();
        let total = book.player(TOTAL_NAME).unwrap();
        for bucket in Bucket::ALL {
            assert_eq!(total.bucket(bucket), BucketCounters::default());
        }
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let mut book = StatsBook::new();
        book.initialize("ana");
        book.record_result("ana", Difficulty::Easy, true).unwrap();

        book.initialize("ana");
        assert_eq!(book.player("ana").unwrap().bucket(Bucket::Easy).played, 1);
    }

    #[test]
    fn test_record_result_unknown_player_fails() {
        let mut book = StatsBook::new();
        assert!(book.record_result("ghost", Difficulty::Easy, true).is_err());
        assert!(book.describe("ghost").is_err());
        assert!(book.chart_rows("ghost").is_err());
    }

    #[test]
    fn test_total_is_not_a_player() {
        let mut book = StatsBook::new();
        assert!(book.record_result(TOTAL_NAME, Difficulty::Easy, true).is_err());
    }

    #[test]
    fn test_ana_easy_win_scenario() {
        let mut book = StatsBook::new();
        book.initialize("Ana");
        book.record_result("Ana", Difficulty::Easy, true).unwrap();

        for name in ["Ana", TOTAL_NAME] {
            let record = book.player(name).unwrap();
            assert_eq!(record.bucket(Bucket::Easy).played, 1);
            assert_eq!(record.bucket(Bucket::Easy).won, 1);
            assert_eq!(record.bucket(Bucket::All).played, 1);
            assert_eq!(record.bucket(Bucket::All).won, 1);
            assert_eq!(record.bucket(Bucket::Medium).played, 0);
            assert_invariants(record);
        }
    }

    #[test]
    fn test_hard_loss_leaves_won_unchanged() {
        let mut book = StatsBook::new();
        book.initialize("bo");
        book.record_result("bo", Difficulty::Hard, false).unwrap();

        let record = book.player("bo").unwrap();
        assert_eq!(record.bucket(Bucket::Hard).played, 1);
        assert_eq!(record.bucket(Bucket::Hard).won, 0);
        assert_invariants(record);
    }

    #[test]
    fn test_invariants_hold_under_mixed_sequence() {
        let mut book = StatsBook::new();
        book.initialize("a");
        book.initialize("b");

        let calls = [
            ("a", Difficulty::Easy, true),
            ("a", Difficulty::Hard, false),
            ("b", Difficulty::Medium, true),
            ("a", Difficulty::Medium, false),
            ("b", Difficulty::Easy, false),
            ("b", Difficulty::Hard, true),
            ("a", Difficulty::Easy, true),
        ];

        for (player, difficulty, won) in calls {
            book.record_result(player, difficulty, won).unwrap();
            assert_invariants(book.player(player).unwrap());
            assert_invariants(book.player(TOTAL_NAME).unwrap());
        }
    }

    #[test]
    fn test_total_equals_sum_of_players() {
        let mut book = StatsBook::new();
        book.initialize("a");
        book.initialize("b");
        book.initialize("c");

        book.record_result("a", Difficulty::Easy, true).unwrap();
        book.record_result("b", Difficulty::Easy, false).unwrap();
        book.record_result("c", Difficulty::Hard, true).unwrap();
        book.record_result("a", Difficulty::Medium, false).unwrap();

        let total = book.player(TOTAL_NAME).unwrap();
        for bucket in Bucket::ALL {
            let summed: u64 = ["a", "b", "c"]
                .iter()
                .map(|&p| book.player(p).unwrap().bucket(bucket).played)
                .sum();
            assert_eq!(total.bucket(bucket).played, summed);

            let summed_won: u64 = ["a", "b", "c"]
                .iter()
                .map(|&p| book.player(p).unwrap().bucket(bucket).won)
                .sum();
            assert_eq!(total.bucket(bucket).won, summed_won);
        }
    }

    #[test]
    fn test_describe_lists_all_buckets() {
        let mut book = StatsBook::new();
        book.initialize("ana");
        book.record_result("ana", Difficulty::Easy, true).unwrap();

        let report = book.describe("ana").unwrap();
        assert!(report.starts_with("Player: ana"));
        assert_eq!(report.lines().count(), 5);
        for label in ["Fácil", "Medio", "Difícil", "All"] {
            assert!(report.contains(label), "missing {}", label);
        }
        assert!(report.contains("Fácil: 1 played, 1 won"));
    }

    #[test]
    fn test_chart_rows_order_and_values() {
        let mut book = StatsBook::new();
        book.initialize("ana");
        book.record_result("ana", Difficulty::Medium, true).unwrap();

        let rows = book.chart_rows("ana").unwrap();
        assert_eq!(rows[0].0, Bucket::Easy);
        assert_eq!(rows[1].0, Bucket::Medium);
        assert_eq!(rows[1].1, BucketCounters { played: 1, won: 1 });
        assert_eq!(rows[3].0, Bucket::All);
        assert_eq!(rows[3].1.played, 1);
    }
}
