//! Voting within the open pairing.

use crate::models::{Entry, Tally, TournamentError, TournamentState};

/// Add one vote for `entry`. The entry must be one of the two in the open pairing.
///
/// An entry without a tally starts at zero, so its first vote yields 1.
pub fn vote(state: &mut TournamentState, entry: &Entry) -> Result<(), TournamentError> {
    if let Some(winner) = &state.winner {
        return Err(TournamentError::AlreadyDecided(winner.clone()));
    }
    let open = state.vote.as_mut().ok_or(TournamentError::NoOpenVote)?;
    if !open.contains(entry) {
        return Err(TournamentError::NotInPairing(entry.clone()));
    }
    let count = open
        .tally
        .get_or_insert_with(Tally::new)
        .entry(entry.clone())
        .or_insert(0);
    *count = count.saturating_add(1);
    Ok(())
}
