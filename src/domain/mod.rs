//! Domain types for rollcall
//! Defines the persisted entry, display filters, list profiles and store errors.

pub mod entry;
pub mod error;
pub mod profile;

pub use entry::*;
pub use error::*;
pub use profile::*;
