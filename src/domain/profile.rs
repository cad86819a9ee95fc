use super::SeedEntry;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Theme of the list. Both profiles share the same table mechanics and only
/// differ in wording and default rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListProfile {
    #[default]
    Tasks,
    Party,
}

impl ListProfile {
    pub fn title(self) -> &'static str {
        match self {
            ListProfile::Tasks => "SQLite Tasks",
            ListProfile::Party => "My RPG Party",
        }
    }

    /// What a set flag means for this profile.
    pub fn flag_noun(self) -> &'static str {
        match self {
            ListProfile::Tasks => "done",
            ListProfile::Party => "recruited",
        }
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            ListProfile::Tasks => "No tasks yet",
            ListProfile::Party => "Nobody in the tavern yet",
        }
    }

    pub fn default_entries(self) -> Vec<SeedEntry> {
        match self {
            ListProfile::Tasks => vec![
                SeedEntry::new("Welcome to SQLite!", false),
                SeedEntry::new("Tap to mark as done", false),
            ],
            ListProfile::Party => vec![
                SeedEntry::new("Gandalf", false),
                SeedEntry::new("Aragorn", true),
            ],
        }
    }
}

impl fmt::Display for ListProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ListProfile::Tasks => "tasks",
            ListProfile::Party => "party",
        };
        write!(f, "{s}")
    }
}

impl FromStr for ListProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tasks" | "todo" => Ok(ListProfile::Tasks),
            "party" | "roster" => Ok(ListProfile::Party),
            _ => Err(format!("Unknown profile: {s}")),
        }
    }
}
