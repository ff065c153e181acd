//! Advancing: close the open pairing, requeue its winner(s), and open the next pairing.

use crate::models::{Entry, TournamentError, TournamentState, VoteState};
use std::collections::VecDeque;

/// Close the current pairing (if any) and pair the next two entries, or declare the winner.
///
/// 1. Resolve the open pairing: the entry with strictly more votes advances; a tie advances both.
/// 2. Append the advancing entries to the back of the queue.
/// 3. If exactly one entry remains, it wins: `entries` and `vote` are cleared.
/// 4. Otherwise the first two entries of the queue become the new pairing, with no tally.
pub fn next(state: &mut TournamentState) -> Result<(), TournamentError> {
    if let Some(winner) = &state.winner {
        return Err(TournamentError::AlreadyDecided(winner.clone()));
    }
    if state.queued() == 0 && state.vote.is_none() {
        return Err(TournamentError::NoEntries);
    }

    let mut pool: VecDeque<Entry> = state.entries.take().unwrap_or_default();
    pool.extend(resolve_winners(state.vote.take().as_ref()));

    if pool.len() == 1 {
        state.winner = pool.pop_front();
        return Ok(());
    }

    let rest = pool.split_off(2);
    let mut front = pool.into_iter();
    if let (Some(a), Some(b)) = (front.next(), front.next()) {
        state.vote = Some(VoteState::new(a, b));
    }
    state.entries = Some(rest);
    Ok(())
}

/// Entries that survive a pairing: the one with strictly more votes, or both on a tie
/// (including nobody voting). No pairing means nobody advances.
fn resolve_winners(vote: Option<&VoteState>) -> Vec<Entry> {
    let Some(vote) = vote else {
        return Vec::new();
    };
    let (a, b) = &vote.pair;
    let (a_votes, b_votes) = (vote.votes_for(a), vote.votes_for(b));
    match a_votes.cmp(&b_votes) {
        std::cmp::Ordering::Greater => vec![a.clone()],
        std::cmp::Ordering::Less => vec![b.clone()],
        std::cmp::Ordering::Equal => vec![a.clone(), b.clone()],
    }
}
