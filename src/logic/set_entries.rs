//! Seeding: install the candidate pool.

use crate::models::{Entry, TournamentState};

/// Replace the queue with `entries`, in iteration order. Every other field is left as is.
///
/// Any iterable works (a `Vec`, a slice of `&str`, a set); duplicates pass through unchanged.
pub fn set_entries<I, E>(state: &mut TournamentState, entries: I)
where
    I: IntoIterator<Item = E>,
    E: Into<Entry>,
{
    state.entries = Some(entries.into_iter().map(Into::into).collect());
}
