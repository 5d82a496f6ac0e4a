use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};

use crate::difficulty::Difficulty;

use super::models::{RoundOutcome, RoundRecord};

/// Insert one completed round into the history
pub async fn insert_round(
    pool: &SqlitePool,
    timestamp: DateTime<Utc>,
    player: &str,
    difficulty: Difficulty,
    secret: u32,
    attempts_used: u32,
    outcome: RoundOutcome,
) -> Result<i64> {
    let timestamp_str = timestamp.to_rfc3339();
    let difficulty_str = difficulty.to_string();
    let outcome_str = outcome.to_string();

    let result = sqlx::query(
        r#"
        INSERT INTO rounds (timestamp, player, difficulty, secret, attempts_used, outcome)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(timestamp_str)
    .bind(player)
    .bind(difficulty_str)
    .bind(secret as i64)
    .bind(attempts_used as i64)
    .bind(outcome_str)
    .execute(pool)
    .await
    .context("Failed to insert round")?;

    Ok(result.last_insert_rowid())
}

fn record_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<RoundRecord> {
    let timestamp_str: String = row.try_get("timestamp")?;
    let timestamp = DateTime::parse_from_rfc3339(&timestamp_str)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now());

    let difficulty_str: String = row.try_get("difficulty")?;
    let difficulty = Difficulty::from_string(&difficulty_str)
        .ok_or_else(|| anyhow::anyhow!("unknown difficulty '{}' in history", difficulty_str))?;

    let outcome_str: String = row.try_get("outcome")?;
    let outcome = RoundOutcome::from_string(&outcome_str)
        .ok_or_else(|| anyhow::anyhow!("unknown outcome '{}' in history", outcome_str))?;

    Ok(RoundRecord {
        id: row.try_get("id")?,
        timestamp,
        player: row.try_get("player")?,
        difficulty,
        secret: row.try_get("secret")?,
        attempts_used: row.try_get("attempts_used")?,
        outcome,
    })
}

/// Get the most recent rounds, newest first
pub async fn recent_rounds(pool: &SqlitePool, limit: i64) -> Result<Vec<RoundRecord>> {
    let rows = sqlx::query(
        r#"
        SELECT id, timestamp, player, difficulty, secret, attempts_used, outcome
        FROM rounds
        ORDER BY timestamp DESC, id DESC
        LIMIT ?
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
    .context("Failed to load recent rounds")?;

    rows.iter().map(record_from_row).collect()
}

/// Number of rounds recorded for one player
pub async fn player_round_count(pool: &SqlitePool, player: &str) -> Result<i64> {
    let row = sqlx::query(
        r#"
        SELECT COUNT(*) as count
        FROM rounds
        WHERE player = ?
        "#,
    )
    .bind(player)
    .fetch_one(pool)
    .await?;

    Ok(row.try_get("count")?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_memory_pool;
    use crate::round::Outcome;

    #[tokio::test]
    async fn test_insert_and_read_back() {
        let pool = create_memory_pool().await.unwrap();

        let id = insert_round(
            &pool,
            Utc::now(),
            "ana",
            Difficulty::Easy,
            7,
            2,
            Outcome::Won.into(),
        )
        .await
        .unwrap();
        assert!(id > 0);

        let rounds = recent_rounds(&pool, 10).await.unwrap();
        assert_eq!(rounds.len(), 1);
        assert_eq!(rounds[0].player, "ana");
        assert_eq!(rounds[0].difficulty, Difficulty::Easy);
        assert_eq!(rounds[0].secret, 7);
        assert_eq!(rounds[0].attempts_used, 2);
        assert!(matches!(rounds[0].outcome, RoundOutcome::Won));
    }

    #[tokio::test]
    async fn test_recent_rounds_newest_first_and_limited() {
        let pool = create_memory_pool().await.unwrap();

        for (player, secret) in [("a", 1), ("b", 2), ("c", 3)] {
            insert_round(
                &pool,
                Utc::now(),
                player,
                Difficulty::Hard,
                secret,
                5,
                RoundOutcome::Lost,
            )
            .await
            .unwrap();
        }

        let rounds = recent_rounds(&pool, 2).await.unwrap();
        assert_eq!(rounds.len(), 2);
        assert_eq!(rounds[0].player, "c");
        assert_eq!(rounds[1].player, "b");
    }

    #[tokio::test]
    async fn test_player_round_count() {
        let pool = create_memory_pool().await.unwrap();

        for won in [true, false] {
            let outcome = if won { RoundOutcome::Won } else { RoundOutcome::Lost };
            insert_round(&pool, Utc::now(), "ana", Difficulty::Medium, 50, 3, outcome)
                .await
                .unwrap();
        }

        assert_eq!(player_round_count(&pool, "ana").await.unwrap(), 2);
        assert_eq!(player_round_count(&pool, "luis").await.unwrap(), 0);
    }
}
