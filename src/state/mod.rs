//! View model projection: the last snapshot plus transient UI state.
//!
//! Actions go through a pure reducer which returns store commands; the
//! commands run against a borrowed [`ListStore`] and their results are fed
//! back as [`StoreAction`]s.

mod action;
mod command;
mod reducer;

pub use action::{Action, StoreAction};
pub use command::Command;

use crate::application::ListStore;
use crate::domain::{Entry, EntryFilter, EntryId, StoreResult};
use std::collections::VecDeque;

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Last full snapshot, newest id first.
    pub snapshot: Vec<Entry>,
    /// Text typed but not yet submitted. Never persisted.
    pub input: String,
    pub filter: EntryFilter,
    pub pending_removal: Option<EntryId>,
    pub last_error: Option<String>,
}

impl ViewState {
    pub fn visible(&self) -> Vec<&Entry> {
        self.filter.apply(&self.snapshot)
    }

    pub fn total(&self) -> usize {
        self.snapshot.len()
    }

    pub fn flagged(&self) -> usize {
        self.snapshot.iter().filter(|e| e.flag).count()
    }

    /// The entry awaiting removal confirmation, if it is still listed.
    pub fn pending_removal_entry(&self) -> Option<&Entry> {
        let id = self.pending_removal?;
        self.snapshot.iter().find(|e| e.id == id)
    }
}

#[derive(Debug, Default)]
pub struct ViewModel {
    pub state: ViewState,
}

impl ViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a view model holding the store's current snapshot.
    pub fn load(store: &ListStore) -> StoreResult<Self> {
        let mut vm = Self::new();
        vm.dispatch(store, Action::Refresh)?;
        Ok(vm)
    }

    /// Apply `action`, running any resulting commands against `store`.
    ///
    /// On failure the previous snapshot is kept, `last_error` is set and the
    /// error is returned; remaining commands of the same action are skipped.
    pub fn dispatch(&mut self, store: &ListStore, action: Action) -> StoreResult<()> {
        let mut queue: VecDeque<Command> = reducer::reduce(&mut self.state, action).into();
        while let Some(command) = queue.pop_front() {
            match run(store, command) {
                Ok(Some(result)) => {
                    queue.extend(reducer::reduce(&mut self.state, Action::Store(result)));
                }
                Ok(None) => {}
                Err(err) => {
                    let message = match std::error::Error::source(&err) {
                        Some(cause) => format!("{err}: {cause}"),
                        None => err.to_string(),
                    };
                    reducer::reduce(&mut self.state, Action::Store(StoreAction::Failed(message)));
                    return Err(err);
                }
            }
        }
        Ok(())
    }
}

fn run(store: &ListStore, command: Command) -> StoreResult<Option<StoreAction>> {
    match command {
        Command::Add { label } => Ok(store.add(&label)?.map(StoreAction::Added)),
        Command::Toggle { id } => {
            store.toggle_flag(id)?;
            Ok(None)
        }
        Command::Remove { id } => {
            store.remove(id)?;
            Ok(None)
        }
        Command::Reload => Ok(Some(StoreAction::Loaded(store.list()?))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::StorageLocation;
    use crate::domain::{SeedEntry, StoreError};

    fn party_store() -> ListStore {
        let store = ListStore::open(StorageLocation::InMemory).unwrap();
        store
            .seed_if_empty(&[
                SeedEntry::new("Gandalf", false),
                SeedEntry::new("Aragorn", true),
            ])
            .unwrap();
        store
    }

    fn labels(vm: &ViewModel) -> Vec<&str> {
        vm.state
            .visible()
            .into_iter()
            .map(|e| e.label.as_str())
            .collect()
    }

    #[test]
    fn load_takes_initial_snapshot() {
        let store = party_store();
        let vm = ViewModel::load(&store).unwrap();

        assert_eq!(labels(&vm), vec!["Aragorn", "Gandalf"]);
        assert_eq!(vm.state.total(), 2);
        assert_eq!(vm.state.flagged(), 1);
    }

    #[test]
    fn submit_adds_clears_input_and_reloads() {
        let store = party_store();
        let mut vm = ViewModel::load(&store).unwrap();

        vm.dispatch(&store, Action::EditInput(" Legolas ".into()))
            .unwrap();
        vm.dispatch(&store, Action::Submit).unwrap();

        assert!(vm.state.input.is_empty());
        assert_eq!(vm.state.snapshot[0].id, 3);
        assert_eq!(vm.state.snapshot[0].label, "Legolas");
        assert!(!vm.state.snapshot[0].flag);
    }

    #[test]
    fn blank_submit_keeps_everything() {
        let store = party_store();
        let mut vm = ViewModel::load(&store).unwrap();

        vm.dispatch(&store, Action::EditInput("   ".into())).unwrap();
        vm.dispatch(&store, Action::Submit).unwrap();

        assert_eq!(vm.state.input, "   ");
        assert_eq!(store.list().unwrap().len(), 2);
    }

    #[test]
    fn toggle_and_confirmed_remove_reload_snapshot() {
        let store = party_store();
        let mut vm = ViewModel::load(&store).unwrap();

        vm.dispatch(&store, Action::Toggle(1)).unwrap();
        assert_eq!(vm.state.flagged(), 2);

        vm.dispatch(&store, Action::RequestRemove(1)).unwrap();
        assert_eq!(
            vm.state.pending_removal_entry().map(|e| e.label.as_str()),
            Some("Gandalf")
        );
        // Nothing is deleted until confirmed.
        assert_eq!(store.list().unwrap().len(), 2);

        vm.dispatch(&store, Action::ConfirmRemove).unwrap();
        assert_eq!(labels(&vm), vec!["Aragorn"]);
    }

    #[test]
    fn filter_is_computed_from_snapshot_only() {
        let store = party_store();
        let mut vm = ViewModel::load(&store).unwrap();

        // A write the view model has not seen yet.
        store.add("Frodo").unwrap();

        vm.dispatch(&store, Action::SetFilter(EntryFilter::Unflagged))
            .unwrap();
        assert_eq!(labels(&vm), vec!["Gandalf"]);

        vm.dispatch(&store, Action::SetFilter(EntryFilter::Flagged))
            .unwrap();
        assert_eq!(labels(&vm), vec!["Aragorn"]);

        vm.dispatch(&store, Action::Refresh).unwrap();
        vm.dispatch(&store, Action::SetFilter(EntryFilter::All))
            .unwrap();
        assert_eq!(labels(&vm), vec!["Frodo", "Aragorn", "Gandalf"]);
    }

    #[test]
    fn failed_command_keeps_previous_snapshot() {
        let store = ListStore::in_memory();
        let mut vm = ViewModel::new();
        vm.state.input = "Sam".into();

        let err = vm.dispatch(&store, Action::Submit).unwrap_err();

        assert!(matches!(err, StoreError::NotInitialized));
        assert_eq!(vm.state.input, "Sam");
        assert!(vm.state.snapshot.is_empty());
        assert_eq!(
            vm.state.last_error.as_deref(),
            Some("List store is not initialized")
        );
    }
}
