use super::ViewState;
use super::action::{Action, StoreAction};
use super::command::Command;
use crate::domain::normalize_label;

pub fn reduce(state: &mut ViewState, action: Action) -> Vec<Command> {
    match action {
        Action::Refresh => vec![Command::Reload],
        Action::EditInput(text) => {
            state.input = text;
            Vec::new()
        }
        Action::Submit => {
            // Blank submissions are dropped without touching the store.
            let Some(label) = normalize_label(&state.input) else {
                return Vec::new();
            };
            vec![
                Command::Add {
                    label: label.to_string(),
                },
                Command::Reload,
            ]
        }
        Action::Toggle(id) => vec![Command::Toggle { id }, Command::Reload],
        Action::RequestRemove(id) => {
            state.pending_removal = Some(id);
            Vec::new()
        }
        Action::ConfirmRemove => match state.pending_removal.take() {
            Some(id) => vec![Command::Remove { id }, Command::Reload],
            None => Vec::new(),
        },
        Action::CancelRemove => {
            state.pending_removal = None;
            Vec::new()
        }
        Action::SetFilter(filter) => {
            state.filter = filter;
            Vec::new()
        }
        Action::Store(action) => reduce_store(state, action),
    }
}

fn reduce_store(state: &mut ViewState, action: StoreAction) -> Vec<Command> {
    match action {
        StoreAction::Added(_) => {
            state.input.clear();
        }
        StoreAction::Loaded(snapshot) => {
            state.snapshot = snapshot;
            state.last_error = None;
        }
        StoreAction::Failed(err) => {
            state.last_error = Some(err);
        }
    }
    Vec::new()
}
