//! SQLite-backed score store.
//!
//! Records are append-only: one insert per accepted submission, never updated
//! or deleted. `created_at` is stored as RFC 3339 text with millisecond
//! precision so that text order is time order.

use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context};
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use rusqlite::{params, Connection};

use crate::core::leaderboard::GameFilter;
use crate::core::submission::ScoreSink;
use crate::types::{GameId, NewScore, ScoreRecord, LEADERBOARD_LIMIT};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS scores (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        player_name TEXT    NOT NULL,
        score       INTEGER NOT NULL,
        game        TEXT    NOT NULL DEFAULT 'tetris',
        created_at  TEXT    NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_scores_game_score ON scores (game, score DESC);
    CREATE INDEX IF NOT EXISTS idx_scores_rank ON scores (score DESC, created_at, id);
";

const SELECT_BY_ID: &str = "
    SELECT id, player_name, score, game, created_at
    FROM scores
    WHERE ?1 IS NULL OR game = ?1
    ORDER BY id";

/// Same order as [`rank_order`](crate::core::leaderboard::rank_order);
/// RFC 3339 text at fixed precision sorts chronologically.
const SELECT_RANKED: &str = "
    SELECT id, player_name, score, game, created_at
    FROM scores
    WHERE ?1 IS NULL OR game = ?1
    ORDER BY score DESC, created_at ASC, id ASC
    LIMIT ?2";

pub struct ScoreStore {
    conn: Mutex<Connection>,
}

/// Row as read from SQLite, before conversion
struct RawScoreRow {
    id: i64,
    player_name: String,
    score: i64,
    game: String,
    created_at: String,
}

impl ScoreStore {
    /// Open (or create) the database file at `path`
    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)
            .with_context(|| format!("failed to open score database {}", path.display()))?;
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory().context("failed to open in-memory database")?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> anyhow::Result<Self> {
        conn.execute_batch(SCHEMA)
            .context("failed to initialize score schema")?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> anyhow::Result<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow!("score store lock poisoned"))
    }

    /// Persist a validated score; the store assigns `id` and `created_at`.
    pub fn insert(&self, new_score: &NewScore) -> anyhow::Result<ScoreRecord> {
        let created_at = Utc::now().trunc_subsecs(3);
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO scores (player_name, score, game, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![
                new_score.player_name,
                new_score.score as i64,
                new_score.game.as_str(),
                created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            ],
        )
        .context("insert score failed")?;

        Ok(ScoreRecord {
            id: conn.last_insert_rowid(),
            player_name: new_score.player_name.clone(),
            score: new_score.score,
            game: new_score.game,
            created_at,
        })
    }

    /// Every record matching `filter`, in insertion order
    pub fn records(&self, filter: GameFilter) -> anyhow::Result<Vec<ScoreRecord>> {
        self.select(SELECT_BY_ID, filter, None)
    }

    /// Top ten records for the leaderboard, ranked by SQLite
    pub fn leaderboard(&self, filter: GameFilter) -> anyhow::Result<Vec<ScoreRecord>> {
        self.select(SELECT_RANKED, filter, Some(LEADERBOARD_LIMIT as i64))
    }

    fn select(
        &self,
        sql: &str,
        filter: GameFilter,
        limit: Option<i64>,
    ) -> anyhow::Result<Vec<ScoreRecord>> {
        if filter == GameFilter::Unknown {
            return Ok(Vec::new());
        }
        let game = filter.game().map(|g| g.as_str());

        let rows = {
            let conn = self.lock()?;
            let mut stmt = conn
                .prepare_cached(sql)
                .context("prepare score query failed")?;
            let map_row = |row: &rusqlite::Row<'_>| -> rusqlite::Result<RawScoreRow> {
                Ok(RawScoreRow {
                    id: row.get(0)?,
                    player_name: row.get(1)?,
                    score: row.get(2)?,
                    game: row.get(3)?,
                    created_at: row.get(4)?,
                })
            };
            let rows = match limit {
                Some(limit) => stmt.query_map(params![game, limit], map_row),
                None => stmt.query_map(params![game], map_row),
            }
            .context("score query failed")?
            .collect::<Result<Vec<_>, _>>()
            .context("reading score rows failed")?;
            rows
        };

        rows.into_iter().map(row_to_record).collect()
    }

    pub fn count(&self) -> anyhow::Result<usize> {
        let conn = self.lock()?;
        let n: i64 = conn
            .query_row("SELECT COUNT(*) FROM scores", [], |row| row.get(0))
            .context("count scores failed")?;
        Ok(n as usize)
    }
}

fn row_to_record(row: RawScoreRow) -> anyhow::Result<ScoreRecord> {
    let game = GameId::from_str(&row.game)
        .ok_or_else(|| anyhow!("bad game {:?} in score row {}", row.game, row.id))?;
    let score = u32::try_from(row.score)
        .with_context(|| format!("bad score {} in score row {}", row.score, row.id))?;
    let created_at = DateTime::parse_from_rfc3339(&row.created_at)
        .with_context(|| format!("bad created_at in score row {}", row.id))?
        .with_timezone(&Utc);

    Ok(ScoreRecord {
        id: row.id,
        player_name: row.player_name,
        score,
        game,
        created_at,
    })
}

impl ScoreSink for ScoreStore {
    fn submit(&mut self, score: NewScore) -> anyhow::Result<ScoreRecord> {
        self.insert(&score)
    }
}
