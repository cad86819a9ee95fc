//! rollcall: a local list (tasks or an RPG party roster) kept in one SQLite
//! table, with a view model that reloads the full list after every change.

pub mod application;
pub mod domain;
pub mod infra;
pub mod state;

pub use application::{AsyncListStore, ListStore, StorageLocation};
pub use domain::{Entry, EntryFilter, EntryId, ListProfile, SeedEntry, StoreError};
pub use state::{Action, ViewModel};
