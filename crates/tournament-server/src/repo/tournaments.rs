//! Tournament repository for database operations.

use rusqlite::types::Type;
use rusqlite::{params_from_iter, Connection, Row};
use std::sync::MutexGuard;
use tournament_core::{NewTournament, Tournament};

use crate::db::{self, DbPool, StorageError};

const SELECT_COLUMNS: &str = "SELECT id, name, sport, level, start_date, end_date, official_url,
        streaming_links, image_url, summary, created_at, updated_at
     FROM tournaments";

const ORDER: &str = "ORDER BY start_date ASC, id ASC";

/// Filter options for listing tournaments.
///
/// Both predicates are exact, case-sensitive matches. `None` and empty
/// strings mean "no constraint".
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TournamentFilter {
    pub sport: Option<String>,
    pub level: Option<String>,
}

impl TournamentFilter {
    /// Filter on sport only.
    pub fn sport(sport: impl Into<String>) -> Self {
        Self {
            sport: Some(sport.into()),
            level: None,
        }
    }

    /// Filter on level only.
    pub fn level(level: impl Into<String>) -> Self {
        Self {
            sport: None,
            level: Some(level.into()),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Repository for tournament database operations.
#[derive(Clone)]
pub struct TournamentRepo {
    db: DbPool,
}

impl TournamentRepo {
    /// Create a new tournament repository with the given database pool.
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, StorageError> {
        self.db.lock().map_err(|_| StorageError::LockPoisoned)
    }

    /// Ensures the schema exists. Repeat calls are no-ops.
    pub fn initialize(&self) -> Result<(), StorageError> {
        let conn = self.conn()?;
        db::initialize(&conn)?;
        Ok(())
    }

    /// Insert a tournament and return its new id.
    ///
    /// Only required-field presence is checked here; sport, level and date
    /// syntax are the caller's concern (see [`tournament_core::validate`]).
    /// `created_at` and `updated_at` receive the same timestamp. Absent
    /// optional fields are stored as empty strings.
    pub fn insert(&self, tournament: &NewTournament) -> Result<i64, StorageError> {
        if let Some(field) = tournament.missing_field() {
            return Err(StorageError::MissingField(field));
        }

        let links = serde_json::to_string(&tournament.streaming_links)?;
        let now = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO tournaments
                (name, sport, level, start_date, end_date, official_url,
                 streaming_links, image_url, summary, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?10)",
            (
                &tournament.name,
                &tournament.sport,
                &tournament.level,
                &tournament.start_date,
                &tournament.end_date,
                tournament.official_url.as_deref().unwrap_or_default(),
                &links,
                tournament.image_url.as_deref().unwrap_or_default(),
                tournament.summary.as_deref().unwrap_or_default(),
                &now,
            ),
        )?;

        Ok(conn.last_insert_rowid())
    }

    /// List every tournament, ordered by start date (ascending).
    pub fn list_all(&self) -> Result<Vec<Tournament>, StorageError> {
        self.filter(&TournamentFilter::default())
    }

    /// List tournaments matching every non-empty predicate in `filter`.
    ///
    /// Ordering is the same as [`Self::list_all`].
    pub fn filter(&self, filter: &TournamentFilter) -> Result<Vec<Tournament>, StorageError> {
        let mut sql = format!("{SELECT_COLUMNS} WHERE 1=1");
        let mut params: Vec<&str> = Vec::new();

        if let Some(sport) = non_empty(&filter.sport) {
            params.push(sport);
            sql.push_str(&format!(" AND sport = ?{}", params.len()));
        }
        if let Some(level) = non_empty(&filter.level) {
            params.push(level);
            sql.push_str(&format!(" AND level = ?{}", params.len()));
        }
        sql.push(' ');
        sql.push_str(ORDER);

        let conn = self.conn()?;
        let mut stmt = conn.prepare(&sql)?;
        let tournaments = stmt
            .query_map(params_from_iter(params), Self::map_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(tournaments)
    }

    /// Number of stored tournaments.
    pub fn count(&self) -> Result<usize, StorageError> {
        let conn = self.conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM tournaments", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    fn map_row(row: &Row<'_>) -> rusqlite::Result<Tournament> {
        let links: Option<String> = row.get(7)?;
        let streaming_links = match links.as_deref() {
            None | Some("") => Vec::new(),
            Some(json) => serde_json::from_str(json).map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(7, Type::Text, Box::new(e))
            })?,
        };

        Ok(Tournament {
            id: row.get(0)?,
            name: row.get(1)?,
            sport: row.get(2)?,
            level: row.get(3)?,
            start_date: row.get(4)?,
            end_date: row.get(5)?,
            official_url: optional_text(row, 6)?,
            streaming_links,
            image_url: optional_text(row, 8)?,
            summary: optional_text(row, 9)?,
            created_at: row.get::<_, Option<String>>(10)?.unwrap_or_default(),
            updated_at: row.get::<_, Option<String>>(11)?.unwrap_or_default(),
        })
    }
}

/// Reads a nullable text column, treating the stored empty-string default as absent.
fn optional_text(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<String>> {
    let value: Option<String> = row.get(idx)?;
    Ok(value.filter(|v| !v.is_empty()))
}
