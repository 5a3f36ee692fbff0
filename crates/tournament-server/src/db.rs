//! Database module for the tournament catalog.

use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Shared handle to the SQLite connection.
pub type DbPool = Arc<Mutex<Connection>>;

/// Errors raised by the storage layer.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("failed to encode streaming links: {0}")]
    LinksEncoding(#[from] serde_json::Error),
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("failed to prepare database location: {0}")]
    Io(#[from] std::io::Error),
    #[error("database connection lock poisoned")]
    LockPoisoned,
}

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS tournaments (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        sport TEXT NOT NULL,
        level TEXT NOT NULL,
        start_date TEXT NOT NULL,
        end_date TEXT NOT NULL,
        official_url TEXT,
        streaming_links TEXT,
        image_url TEXT,
        summary TEXT,
        created_at TEXT DEFAULT CURRENT_TIMESTAMP,
        updated_at TEXT DEFAULT CURRENT_TIMESTAMP
    );

    CREATE INDEX IF NOT EXISTS idx_tournaments_start_date ON tournaments(start_date);
    CREATE INDEX IF NOT EXISTS idx_tournaments_sport ON tournaments(sport);
    CREATE INDEX IF NOT EXISTS idx_tournaments_level ON tournaments(level);
";

/// Ensures the `tournaments` table and its indexes exist. Safe to repeat.
pub fn initialize(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA)
}

/// Opens the database at `path` and initializes the schema.
///
/// The parent directory is created if missing. Use `:memory:` for an
/// in-memory database.
///
/// # Errors
///
/// Returns an error if the directory cannot be created, the database cannot
/// be opened, or schema creation fails.
pub fn init_db<P: AsRef<Path>>(path: P) -> Result<DbPool, StorageError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let conn = Connection::open(path)?;
    initialize(&conn)?;

    Ok(Arc::new(Mutex::new(conn)))
}
