//! SQLite database setup and connection management for rollcall
//! Handles opening the database file and creating the `entries` table.

use anyhow::{Context, Result};
use parking_lot::Mutex;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::repository::{DbConn, EntryRepository};

/// Database wrapper that owns the single SQLite connection
pub struct Database {
    conn: DbConn,
}

impl Database {
    /// Create an in-memory database (useful for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.init()?;
        Ok(db)
    }

    /// Create or open the database at a specific path
    pub fn open_at(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create database directory {}", parent.display())
            })?;
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database at {}", path.display()))?;
        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.init()?;
        log::info!("Opened list database at {}", path.display());
        Ok(db)
    }

    /// Get the default database path
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("ROLLCALL_DB_PATH") {
            return PathBuf::from(path);
        }
        crate::infra::app_config::app_data_dir().join("db.sqlite")
    }

    /// Ensure the schema exists. A no-op on an already initialized database.
    pub fn init(&self) -> Result<()> {
        let conn = self.conn.lock();
        Self::create_schema(&conn)
    }

    /// Get a handle to the connection
    pub fn connection(&self) -> DbConn {
        self.conn.clone()
    }

    pub fn entry_repo(&self) -> EntryRepository {
        EntryRepository::new(self.connection())
    }

    fn create_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS entries (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                label TEXT NOT NULL,
                flag INTEGER NOT NULL DEFAULT 0 CHECK (flag IN (0, 1)),
                created_at TEXT NOT NULL
            );
            "#,
        )
        .context("Failed to create entries table")?;
        Ok(())
    }
}
