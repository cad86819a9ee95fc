//! Application layer (use-cases).
//!
//! Owns the list store and its async facade; knows nothing about how the
//! list is rendered.

pub mod async_store;
pub mod list_store;

pub use async_store::AsyncListStore;
pub use list_store::{ListStore, StorageLocation};
