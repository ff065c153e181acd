//! Data structures for the tournament: entries, the open vote, and the root state.

mod action;
mod entry;
mod state;

pub use action::Action;
pub use entry::Entry;
pub use state::{Tally, TournamentError, TournamentState, VoteState};
