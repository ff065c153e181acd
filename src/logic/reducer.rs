//! Reducer: dispatch an action to its transition.

use crate::logic::{next, set_entries, vote};
use crate::models::{Action, TournamentError, TournamentState};

/// Apply one action in place. On `Err` the state is untouched.
pub fn apply(state: &mut TournamentState, action: &Action) -> Result<(), TournamentError> {
    match action {
        Action::SetEntries { entries } => {
            set_entries(state, entries.iter().cloned());
            Ok(())
        }
        Action::Advance => next(state),
        Action::Vote { entry } => vote(state, entry),
        Action::Unknown => Ok(()),
    }
}

/// Next state for `action`. Never fails: a rejected or unknown action returns `state` unchanged.
pub fn reduce(mut state: TournamentState, action: &Action) -> TournamentState {
    let _ = apply(&mut state, action);
    state
}
