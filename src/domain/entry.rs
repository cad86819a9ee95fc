use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Store-assigned surrogate key of an entry.
pub type EntryId = i64;

/// One row of the persisted list: a task or a party member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique for the lifetime of the table, never reused.
    pub id: EntryId,
    /// Trimmed, never empty.
    pub label: String,
    /// The single toggle bit ("done" / "recruited").
    pub flag: bool,
    /// Insert timestamp in RFC3339 format.
    pub created_at: String,
}

/// A default entry inserted by `seed_if_empty`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedEntry {
    pub label: String,
    pub flag: bool,
}

impl SeedEntry {
    pub fn new(label: impl Into<String>, flag: bool) -> Self {
        Self {
            label: label.into(),
            flag,
        }
    }
}

/// Returns the trimmed label, or `None` when nothing is left to store.
pub fn normalize_label(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Display filter applied to a snapshot. Never touches the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryFilter {
    #[default]
    All,
    Flagged,
    Unflagged,
}

impl EntryFilter {
    pub fn matches(self, entry: &Entry) -> bool {
        match self {
            EntryFilter::All => true,
            EntryFilter::Flagged => entry.flag,
            EntryFilter::Unflagged => !entry.flag,
        }
    }

    pub fn apply(self, entries: &[Entry]) -> Vec<&Entry> {
        entries.iter().filter(|e| self.matches(e)).collect()
    }
}

impl fmt::Display for EntryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntryFilter::All => "all",
            EntryFilter::Flagged => "flagged",
            EntryFilter::Unflagged => "unflagged",
        };
        write!(f, "{s}")
    }
}

impl FromStr for EntryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(EntryFilter::All),
            "flagged" | "done" | "recruited" => Ok(EntryFilter::Flagged),
            "unflagged" | "open" | "available" => Ok(EntryFilter::Unflagged),
            _ => Err(format!("Unknown filter: {s}")),
        }
    }
}
