use crate::domain::{Entry, EntryFilter, EntryId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Re-read the whole list from the store.
    Refresh,
    EditInput(String),
    /// Add the pending input as a new entry.
    Submit,
    Toggle(EntryId),
    /// Ask for confirmation before removing `id`.
    RequestRemove(EntryId),
    ConfirmRemove,
    CancelRemove,
    SetFilter(EntryFilter),
    Store(StoreAction),
}

/// Results of store commands, fed back into the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreAction {
    Added(EntryId),
    Loaded(Vec<Entry>),
    Failed(String),
}
