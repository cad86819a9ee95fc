use crate::domain::EntryId;

/// Side effects requested by the reducer, executed against the list store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { label: String },
    Toggle { id: EntryId },
    Remove { id: EntryId },
    Reload,
}
