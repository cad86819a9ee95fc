//! Repository implementations for data access in rollcall.
//!
//! Provides the row-level operations on the `entries` table.

mod entry;

pub use entry::{EntryRepository, SeedError};

use parking_lot::Mutex;
use rusqlite::Connection;
use std::sync::Arc;

pub type DbConn = Arc<Mutex<Connection>>;
