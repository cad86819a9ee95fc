use super::DbConn;
use crate::domain::{Entry, EntryId, SeedEntry};
use anyhow::Result;
use thiserror::Error;

const SELECT_ENTRIES: &str =
    "SELECT id, label, flag, created_at FROM entries ORDER BY id DESC";

/// Which half of a seed transaction failed.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to count entries")]
    Count(#[source] rusqlite::Error),
    #[error("Failed to insert default entries")]
    Insert(#[source] rusqlite::Error),
}

/// Repository for entry operations.
pub struct EntryRepository {
    conn: DbConn,
}

impl EntryRepository {
    pub fn new(conn: DbConn) -> Self {
        Self { conn }
    }

    pub fn count(&self) -> Result<usize> {
        let conn = self.conn.lock();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Insert a row and return its id. The label is stored as given.
    pub fn insert(&self, label: &str, flag: bool) -> Result<EntryId> {
        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO entries (label, flag, created_at) VALUES (?1, ?2, ?3)",
            rusqlite::params![label, flag as i32, now()],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Insert `defaults` in order if and only if the table is empty.
    ///
    /// The count and the inserts share one transaction under one lock hold.
    pub fn seed_if_empty(&self, defaults: &[SeedEntry]) -> Result<usize, SeedError> {
        let mut conn = self.conn.lock();
        let tx = conn.transaction().map_err(SeedError::Insert)?;

        let count: i64 = tx
            .query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))
            .map_err(SeedError::Count)?;
        if count > 0 {
            return Ok(0);
        }

        let created_at = now();
        let mut inserted = 0usize;
        {
            let mut stmt = tx
                .prepare("INSERT INTO entries (label, flag, created_at) VALUES (?1, ?2, ?3)")
                .map_err(SeedError::Insert)?;
            for seed in defaults {
                let Some(label) = crate::domain::normalize_label(&seed.label) else {
                    log::warn!("Skipping blank default entry");
                    continue;
                };
                stmt.execute(rusqlite::params![label, seed.flag as i32, &created_at])
                    .map_err(SeedError::Insert)?;
                inserted += 1;
            }
        }
        tx.commit().map_err(SeedError::Insert)?;
        Ok(inserted)
    }

    /// Flip the flag of one entry. Returns the number of rows affected.
    pub fn toggle_flag(&self, id: EntryId) -> Result<usize> {
        let conn = self.conn.lock();
        let affected = conn.execute("UPDATE entries SET flag = 1 - flag WHERE id = ?1", [id])?;
        Ok(affected)
    }

    pub fn delete(&self, id: EntryId) -> Result<usize> {
        let conn = self.conn.lock();
        let affected = conn.execute("DELETE FROM entries WHERE id = ?1", [id])?;
        Ok(affected)
    }

    pub fn find_by_id(&self, id: EntryId) -> Result<Option<Entry>> {
        let conn = self.conn.lock();
        let mut stmt =
            conn.prepare("SELECT id, label, flag, created_at FROM entries WHERE id = ?1")?;
        let mut rows = stmt.query_map([id], map_entry)?;

        if let Some(row) = rows.next() {
            row.map(Some).map_err(Into::into)
        } else {
            Ok(None)
        }
    }

    /// All entries, newest id first.
    pub fn find_all(&self) -> Result<Vec<Entry>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(SELECT_ENTRIES)?;
        let rows = stmt.query_map([], map_entry)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}

fn map_entry(row: &rusqlite::Row<'_>) -> rusqlite::Result<Entry> {
    Ok(Entry {
        id: row.get(0)?,
        label: row.get(1)?,
        flag: row.get::<_, i32>(2)? != 0,
        created_at: row.get(3)?,
    })
}

fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}
