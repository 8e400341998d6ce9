//! SQLite persistence for mood records.
//!
//! This module provides the durable `MoodStore` implementation. It uses
//! connection pooling via r2d2 so reads can run concurrently with each other.
//!
//! # Module Structure
//!
//! - `schema`: Table definitions, schema initialization and upgrades
//! - `moods`: Mood record CRUD operations
//!
//! # Example
//!
//! ```no_run
//! use micromood::db::Database;
//! use std::path::Path;
//!
//! let db = Database::open(Path::new("/tmp/micromood.db"))?;
//! db.initialize_schema()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod moods;
pub mod schema;

use crate::errors::{AppResult, DatabaseError};
use crate::mood::{DateKey, MoodRecord};
use crate::store::MoodStore;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Type alias for a pooled SQLite connection.
pub type PooledConnection = r2d2::PooledConnection<SqliteConnectionManager>;

/// How long a connection waits on a locked database before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Database handle with connection pooling.
pub struct Database {
    pool: Pool<SqliteConnectionManager>,
}

impl Database {
    /// Opens or creates a SQLite database file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Database file cannot be opened
    /// - Connection pool cannot be initialized
    pub fn open(db_path: &Path) -> AppResult<Self> {
        debug!("Opening database at: {:?}", db_path);

        let manager = SqliteConnectionManager::file(db_path);
        let pool = Pool::builder()
            .max_size(5) // Allow up to 5 concurrent readers
            .connection_customizer(Box::new(ConnectionPragmas))
            .build(manager)
            .map_err(DatabaseError::Pool)?;

        // Test the connection
        let conn = pool.get().map_err(DatabaseError::Pool)?;
        conn.query_row("SELECT 1", [], |row| row.get::<_, i32>(0))
            .map_err(DatabaseError::Sqlite)?;
        drop(conn);

        info!("Database opened successfully");
        Ok(Database { pool })
    }

    /// Opens a private in-memory database with its schema in place.
    ///
    /// The pool is limited to one connection because every SQLite in-memory
    /// connection is its own database.
    pub fn open_in_memory() -> AppResult<Self> {
        let pool = Pool::builder()
            .max_size(1)
            .connection_customizer(Box::new(ConnectionPragmas))
            .build(SqliteConnectionManager::memory())
            .map_err(DatabaseError::Pool)?;

        let db = Database { pool };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Gets a connection from the pool.
    ///
    /// # Errors
    ///
    /// Returns an error if no connection is available or the pool is exhausted.
    pub fn get_conn(&self) -> AppResult<PooledConnection> {
        self.pool.get().map_err(|e| DatabaseError::Pool(e).into())
    }

    /// Initializes the database schema.
    ///
    /// Creates all necessary tables and indexes if they don't exist.
    /// This is idempotent and safe to call multiple times.
    pub fn initialize_schema(&self) -> AppResult<()> {
        let conn = self.get_conn()?;
        schema::create_tables(&conn)?;
        info!("Database schema initialized");
        Ok(())
    }
}

impl MoodStore for Database {
    fn upsert(&self, record: &MoodRecord) -> AppResult<()> {
        let conn = self.get_conn()?;
        moods::upsert_mood(&conn, record)
    }

    fn get(&self, day: DateKey) -> AppResult<Option<MoodRecord>> {
        let conn = self.get_conn()?;
        moods::get_mood(&conn, day)
    }

    fn get_all(&self) -> AppResult<Vec<MoodRecord>> {
        let conn = self.get_conn()?;
        moods::get_all_moods(&conn)
    }

    fn get_range(&self, start: DateKey, end: DateKey) -> AppResult<Vec<MoodRecord>> {
        let conn = self.get_conn()?;
        moods::get_moods_between(&conn, start, end)
    }

    fn remove(&self, day: DateKey) -> AppResult<bool> {
        let conn = self.get_conn()?;
        moods::delete_mood(&conn, day)
    }

    fn update_notes(&self, day: DateKey, notes: Option<String>) -> AppResult<bool> {
        let conn = self.get_conn()?;
        moods::update_mood_notes(&conn, day, notes)
    }

    fn count(&self) -> AppResult<usize> {
        let conn = self.get_conn()?;
        moods::count_moods(&conn)
    }
}

/// Connection customizer applied to every pooled connection.
#[derive(Debug)]
struct ConnectionPragmas;

impl r2d2::CustomizeConnection<Connection, rusqlite::Error> for ConnectionPragmas {
    fn on_acquire(&self, conn: &mut Connection) -> Result<(), rusqlite::Error> {
        conn.busy_timeout(BUSY_TIMEOUT)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(())
    }

    fn on_release(&self, _conn: Connection) {}
}
