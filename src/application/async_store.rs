//! Async facade over [`ListStore`].
//!
//! SQLite calls block, so each operation runs on the tokio blocking pool and
//! the returned future resolves only once the write or read has finished.

use super::list_store::{ListStore, StorageLocation};
use crate::domain::{Entry, EntryId, SeedEntry, StoreResult};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Clone)]
pub struct AsyncListStore {
    inner: Arc<Mutex<ListStore>>,
}

impl AsyncListStore {
    pub fn new(store: ListStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Construct an uninitialized store for `location`.
    pub fn for_location(location: StorageLocation) -> Self {
        Self::new(ListStore::new(location))
    }

    pub async fn initialize(&self) -> StoreResult<()> {
        self.run(|store| store.initialize()).await
    }

    pub async fn seed_if_empty(&self, defaults: Vec<SeedEntry>) -> StoreResult<usize> {
        self.run(move |store| store.seed_if_empty(&defaults)).await
    }

    pub async fn list(&self) -> StoreResult<Vec<Entry>> {
        self.run(|store| store.list()).await
    }

    pub async fn add(&self, label: impl Into<String>) -> StoreResult<Option<EntryId>> {
        let label = label.into();
        self.run(move |store| store.add(&label)).await
    }

    pub async fn toggle_flag(&self, id: EntryId) -> StoreResult<bool> {
        self.run(move |store| store.toggle_flag(id)).await
    }

    pub async fn remove(&self, id: EntryId) -> StoreResult<bool> {
        self.run(move |store| store.remove(id)).await
    }

    async fn run<T, F>(&self, op: F) -> StoreResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut ListStore) -> StoreResult<T> + Send + 'static,
    {
        let inner = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let mut store = inner.lock();
            op(&mut store)
        })
        .await?
    }
}
