//! Head-to-head voting tournament: library with models, state transitions, and the session store.

pub mod entries;
pub mod logic;
pub mod models;
pub mod store;

pub use entries::{load_entries, parse_entries, EntriesFormat, LoadError};
pub use logic::{apply, next, reduce, set_entries, vote};
pub use models::{Action, Entry, Tally, TournamentError, TournamentState, VoteState};
pub use store::{Store, SubscriptionId};
