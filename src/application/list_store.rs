//! The list store: sole owner of the persisted `entries` table.
//!
//! Every mutation is a single-row write; callers re-read the whole list with
//! [`ListStore::list`] afterwards instead of patching their copy.

use crate::domain::{Entry, EntryId, SeedEntry, StoreError, StoreResult, normalize_label};
use crate::infra::db::{Database, EntryRepository, SeedError};
use std::path::PathBuf;

/// Where the backing database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageLocation {
    File(PathBuf),
    InMemory,
}

enum StoreState {
    Uninitialized,
    Ready { db: Database, entries: EntryRepository },
}

pub struct ListStore {
    location: StorageLocation,
    state: StoreState,
}

impl ListStore {
    pub fn new(location: StorageLocation) -> Self {
        Self {
            location,
            state: StoreState::Uninitialized,
        }
    }

    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self::new(StorageLocation::File(path.into()))
    }

    pub fn in_memory() -> Self {
        Self::new(StorageLocation::InMemory)
    }

    /// Construct and initialize in one step.
    pub fn open(location: StorageLocation) -> StoreResult<Self> {
        let mut store = Self::new(location);
        store.initialize()?;
        Ok(store)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, StoreState::Ready { .. })
    }

    /// Open the backing database and make sure the table exists.
    ///
    /// Calling this again on a ready store only re-checks the schema.
    pub fn initialize(&mut self) -> StoreResult<()> {
        if let StoreState::Ready { db, .. } = &self.state {
            return db.init().map_err(|err| {
                log::error!("Schema check failed: {err:#}");
                StoreError::StorageUnavailable(err)
            });
        }

        let opened = match &self.location {
            StorageLocation::File(path) => Database::open_at(path),
            StorageLocation::InMemory => Database::open_in_memory(),
        };
        let db = opened.map_err(|err| {
            log::error!("Failed to open list storage: {err:#}");
            StoreError::StorageUnavailable(err)
        })?;

        let entries = db.entry_repo();
        self.state = StoreState::Ready { db, entries };
        log::info!("List store ready ({:?})", self.location);
        Ok(())
    }

    /// Insert `defaults` in order, only when the table has no rows at all.
    ///
    /// Returns the number of rows inserted.
    pub fn seed_if_empty(&self, defaults: &[SeedEntry]) -> StoreResult<usize> {
        let inserted = self
            .entries()?
            .seed_if_empty(defaults)
            .map_err(|err| match err {
                SeedError::Count(err) => read_error(err.into()),
                SeedError::Insert(err) => write_error(err.into()),
            })?;
        if inserted > 0 {
            log::info!("Seeded {inserted} default entries");
        }
        Ok(inserted)
    }

    /// Full snapshot, newest id first. Never cached.
    pub fn list(&self) -> StoreResult<Vec<Entry>> {
        self.entries()?.find_all().map_err(read_error)
    }

    /// Add an entry with the flag cleared.
    ///
    /// A label that is blank after trimming is ignored and yields `None`.
    pub fn add(&self, label: &str) -> StoreResult<Option<EntryId>> {
        let entries = self.entries()?;
        let Some(label) = normalize_label(label) else {
            log::debug!("Ignoring blank label");
            return Ok(None);
        };
        let id = entries.insert(label, false).map_err(write_error)?;
        log::debug!("Added entry {id}");
        Ok(Some(id))
    }

    /// Flip the flag of `id`. Returns whether a row matched; an unknown id
    /// is not an error.
    pub fn toggle_flag(&self, id: EntryId) -> StoreResult<bool> {
        let affected = self.entries()?.toggle_flag(id).map_err(write_error)?;
        log::debug!("Toggled entry {id} ({affected} row(s))");
        Ok(affected > 0)
    }

    /// Delete `id` immediately. Returns whether a row matched; an unknown id
    /// is not an error.
    pub fn remove(&self, id: EntryId) -> StoreResult<bool> {
        let affected = self.entries()?.delete(id).map_err(write_error)?;
        log::debug!("Removed entry {id} ({affected} row(s))");
        Ok(affected > 0)
    }

    fn entries(&self) -> StoreResult<&EntryRepository> {
        match &self.state {
            StoreState::Ready { entries, .. } => Ok(entries),
            StoreState::Uninitialized => Err(StoreError::NotInitialized),
        }
    }
}

fn read_error(err: anyhow::Error) -> StoreError {
    log::error!("Failed to load entries: {err:#}");
    StoreError::StorageRead(err)
}

fn write_error(err: anyhow::Error) -> StoreError {
    log::error!("Failed to write entries: {err:#}");
    StoreError::StorageWrite(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready() -> ListStore {
        ListStore::open(StorageLocation::InMemory).unwrap()
    }

    fn ids(store: &ListStore) -> Vec<EntryId> {
        store.list().unwrap().iter().map(|e| e.id).collect()
    }

    #[test]
    fn operations_fail_before_initialize() {
        let store = ListStore::in_memory();
        assert!(!store.is_ready());

        assert!(matches!(store.list(), Err(StoreError::NotInitialized)));
        assert!(matches!(store.add("x"), Err(StoreError::NotInitialized)));
        assert!(matches!(store.add("  "), Err(StoreError::NotInitialized)));
        assert!(matches!(store.toggle_flag(1), Err(StoreError::NotInitialized)));
        assert!(matches!(store.remove(1), Err(StoreError::NotInitialized)));
        assert!(matches!(
            store.seed_if_empty(&[]),
            Err(StoreError::NotInitialized)
        ));
    }

    #[test]
    fn initialize_twice_keeps_rows() {
        let mut store = ListStore::in_memory();
        store.initialize().unwrap();
        store.add("keep me").unwrap();

        store.initialize().unwrap();

        assert!(store.is_ready());
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn add_trims_and_returns_increasing_ids() {
        let store = ready();
        let a = store.add("  Legolas  ").unwrap().unwrap();
        let b = store.add("Gimli").unwrap().unwrap();
        assert!(b > a);

        let snapshot = store.list().unwrap();
        assert_eq!(snapshot[1].label, "Legolas");
        assert!(!snapshot[1].flag);
    }

    #[test]
    fn blank_labels_are_ignored() {
        let store = ready();
        assert_eq!(store.add("").unwrap(), None);
        assert_eq!(store.add("   ").unwrap(), None);
        assert_eq!(store.add("\n\t").unwrap(), None);
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn toggle_and_remove_report_matches() {
        let store = ready();
        let id = store.add("Boromir").unwrap().unwrap();

        assert!(store.toggle_flag(id).unwrap());
        assert!(!store.toggle_flag(id + 100).unwrap());
        assert!(store.remove(id).unwrap());
        assert!(!store.remove(id).unwrap());
        assert!(!store.toggle_flag(id).unwrap());
    }

    #[test]
    fn list_is_ordered_newest_first_after_mutations() {
        let store = ready();
        for label in ["a", "b", "c", "d"] {
            store.add(label).unwrap();
        }
        store.toggle_flag(2).unwrap();
        store.remove(3).unwrap();
        store.add("e").unwrap();

        assert_eq!(ids(&store), vec![5, 4, 2, 1]);
    }

    #[test]
    fn read_failure_maps_to_storage_read() {
        let store = ready();
        if let StoreState::Ready { db, .. } = &store.state {
            db.connection()
                .lock()
                .execute_batch("DROP TABLE entries")
                .unwrap();
        }

        assert!(matches!(store.list(), Err(StoreError::StorageRead(_))));
        assert!(matches!(store.add("x"), Err(StoreError::StorageWrite(_))));
        assert!(matches!(
            store.toggle_flag(1),
            Err(StoreError::StorageWrite(_))
        ));
        assert!(matches!(store.remove(1), Err(StoreError::StorageWrite(_))));
        assert!(matches!(
            store.seed_if_empty(&[SeedEntry::new("default", false)]),
            Err(StoreError::StorageRead(_))
        ));
    }

    #[test]
    fn failed_seed_insert_maps_to_storage_write() {
        let store = ready();
        if let StoreState::Ready { db, .. } = &store.state {
            db.connection()
                .lock()
                .execute_batch(
                    "CREATE TRIGGER no_inserts BEFORE INSERT ON entries
                     BEGIN SELECT RAISE(ABORT, 'read only'); END;",
                )
                .unwrap();
        }

        assert!(matches!(
            store.seed_if_empty(&[SeedEntry::new("default", false)]),
            Err(StoreError::StorageWrite(_))
        ));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn unavailable_storage_is_reported_and_store_stays_uninitialized() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"file").unwrap();

        let mut store = ListStore::at_path(blocker.join("db.sqlite"));
        assert!(matches!(
            store.initialize(),
            Err(StoreError::StorageUnavailable(_))
        ));
        assert!(!store.is_ready());
        assert!(matches!(store.list(), Err(StoreError::NotInitialized)));
    }

    #[test]
    fn file_that_is_not_a_database_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.sqlite");
        std::fs::write(&path, vec![0xA5u8; 4096]).unwrap();

        let mut store = ListStore::at_path(&path);
        assert!(matches!(
            store.initialize(),
            Err(StoreError::StorageUnavailable(_))
        ));
        assert!(!store.is_ready());
        assert!(matches!(store.add("x"), Err(StoreError::NotInitialized)));
    }
}
