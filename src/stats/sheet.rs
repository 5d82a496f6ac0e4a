//! Translation between the typed [`StatsBook`] and the persisted workbook
//! schema: one named table per player plus `total`, row labels
//! `"", Jugadas, Ganadas`, column labels `"", Fácil, Medio, Difícil, All`.
//! All knowledge of the tabular layout lives here.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::difficulty::Bucket;
use super::{BucketCounters, PlayerRecord, StatsBook, TOTAL_NAME};

const PLAYED_LABEL: &str = "Jugadas";
const WON_LABEL: &str = "Ganadas";

/// A workbook cell: a text label or a counter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
enum Cell {
    Count(u64),
    Label(String),
}

/// One player's table, rows in persisted order.
#[derive(Debug, Serialize, Deserialize)]
struct Sheet {
    rows: Vec<Vec<Cell>>,
}

fn header_row() -> Vec<Cell> {
    let mut row = vec![Cell::Label(String::new())];
    row.extend(Bucket::ALL.map(|b| Cell::Label(b.label().to_string())));
    row
}

fn counter_row(label: &str, record: &PlayerRecord, pick: fn(BucketCounters) -> u64) -> Vec<Cell> {
    let mut row = vec![Cell::Label(label.to_string())];
    row.extend(Bucket::ALL.map(|b| Cell::Count(pick(record.bucket(b)))));
    row
}

fn sheet_from_record(record: &PlayerRecord) -> Sheet {
    Sheet {
        rows: vec![
            header_row(),
            counter_row(PLAYED_LABEL, record, |c| c.played),
            counter_row(WON_LABEL, record, |c| c.won),
        ],
    }
}

fn expect_label(cell: Option<&Cell>, want: &str) -> Result<()> {
    match cell {
        Some(Cell::Label(s)) if s == want => Ok(()),
        other => anyhow::bail!("expected label {:?}, found {:?}", want, other),
    }
}

fn counts(row: &[Cell], label: &str) -> Result<[u64; 4]> {
    expect_label(row.first(), label)?;
    let mut values = [0u64; 4];
    for (i, slot) in values.iter_mut().enumerate() {
        match row.get(i + 1) {
            Some(Cell::Count(n)) => *slot = *n,
            other => anyhow::bail!("row {:?}: expected a count, found {:?}", label, other),
        }
    }
    Ok(values)
}

fn record_from_sheet(sheet: &Sheet) -> Result<PlayerRecord> {
    if sheet.rows.len() != 3 {
        anyhow::bail!("expected 3 rows, found {}", sheet.rows.len());
    }

    let header = &sheet.rows[0];
    expect_label(header.first(), "")?;
    for (i, bucket) in Bucket::ALL.iter().enumerate() {
        expect_label(header.get(i + 1), bucket.label())?;
    }

    let played = counts(&sheet.rows[1], PLAYED_LABEL)?;
    let won = counts(&sheet.rows[2], WON_LABEL)?;

    let mut record = PlayerRecord::default();
    for (i, bucket) in Bucket::ALL.iter().enumerate() {
        let counters = record.bucket_mut(*bucket);
        counters.played = played[i];
        counters.won = won[i];
    }
    Ok(record)
}

/// Default workbook location under the platform data directory.
pub fn default_stats_path() -> Result<std::path::PathBuf> {
    let mut path = dirs::data_dir()
        .context("Unable to determine data directory for your platform")?;
    path.push("adivina");
    path.push("stats.json");
    Ok(path)
}

/// Write the whole book to `path`, one table per record.
pub fn save(book: &StatsBook, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let tables: BTreeMap<&str, Sheet> = book
        .records
        .iter()
        .map(|(name, record)| (name.as_str(), sheet_from_record(record)))
        .collect();

    let json = serde_json::to_string_pretty(&tables)?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write stats workbook to {}", path.display()))?;
    Ok(())
}

/// Load a book from `path`. A missing file yields a fresh book containing
/// only the zeroed `total` table.
pub fn load(path: &Path) -> Result<StatsBook> {
    if !path.exists() {
        return Ok(StatsBook::new());
    }

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read stats workbook {}", path.display()))?;
    let tables: BTreeMap<String, Sheet> =
        serde_json::from_str(&text).context("stats workbook is not valid JSON")?;

    if !tables.contains_key(TOTAL_NAME) {
        anyhow::bail!("stats workbook has no '{}' table", TOTAL_NAME);
    }

    let mut book = StatsBook::new();
    for (name, sheet) in &tables {
        let record = record_from_sheet(sheet)
            .with_context(|| format!("malformed table for '{}'", name))?;
        book.records.insert(name.clone(), record);
    }
    Ok(book)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::Difficulty;

    fn sample_book() -> StatsBook {
        let mut book = StatsBook::new();
        book.initialize("ana");
        book.initialize("luis");
        book.record_result("ana", Difficulty::Easy, true).unwrap();
        book.record_result("ana", Difficulty::Hard, false).unwrap();
        book.record_result("luis", Difficulty::Medium, true).unwrap();
        book
    }

    #[test]
    fn test_round_trip_preserves_book() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");

        let book = sample_book();
        save(&book, &path).unwrap();
        let loaded = load(&path).unwrap();

        assert_eq!(loaded, book);
    }

    #[test]
    fn test_missing_file_yields_fresh_book() {
        let dir = tempfile::tempdir().unwrap();
        let book = load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(book, StatsBook::new());
    }

    #[test]
    fn test_persisted_labels_are_exact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");
        save(&sample_book(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let tables: BTreeMap<String, Sheet> = serde_json::from_str(&text).unwrap();

        let ana = &tables["ana"];
        assert_eq!(
            ana.rows[0],
            vec![
                Cell::Label("".into()),
                Cell::Label("Fácil".into()),
                Cell::Label("Medio".into()),
                Cell::Label("Difícil".into()),
                Cell::Label("All".into()),
            ]
        );
        assert_eq!(ana.rows[1][0], Cell::Label("Jugadas".into()));
        assert_eq!(ana.rows[2][0], Cell::Label("Ganadas".into()));
        // (Jugadas, Fácil) holds ana's easy played counter.
        assert_eq!(ana.rows[1][1], Cell::Count(1));
        assert_eq!(ana.rows[2][1], Cell::Count(1));
        // (Ganadas, Difícil) stays zero for the lost hard round.
        assert_eq!(ana.rows[2][3], Cell::Count(0));
    }

    #[test]
    fn test_load_rejects_missing_total() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");
        std::fs::write(&path, "{}").unwrap();
        assert!(load(&path).is_err());
    }

    #[test]
    fn test_load_rejects_mangled_labels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");
        save(&sample_book(), &path).unwrap();

        let text = std::fs::read_to_string(&path)
            .unwrap()
            .replace("Jugadas", "Played");
        std::fs::write(&path, text).unwrap();

        assert!(load(&path).is_err());
    }
}
