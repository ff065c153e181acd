//! TournamentState, VoteState, and TournamentError.

use crate::models::entry::Entry;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, VecDeque};

/// Votes per entry for the open pairing. An entry with no votes yet has no key.
pub type Tally = BTreeMap<Entry, u32>;

/// Errors an action can be rejected with. A rejected action leaves the state unchanged.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Vote cast while no pairing is open.
    NoOpenVote,
    /// Vote cast for an entry that is not one of the two in the open pairing.
    NotInPairing(Entry),
    /// Advance with nothing queued and no pairing to close.
    NoEntries,
    /// The tournament already has a winner.
    AlreadyDecided(Entry),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::NoOpenVote => write!(f, "No pairing is open for voting"),
            TournamentError::NotInPairing(entry) => {
                write!(f, "Entry '{}' is not in the current pairing", entry)
            }
            TournamentError::NoEntries => write!(f, "No entries left to pair"),
            TournamentError::AlreadyDecided(winner) => {
                write!(f, "Tournament already won by '{}'", winner)
            }
        }
    }
}

impl std::error::Error for TournamentError {}

/// The pairing currently up for vote and its tally.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct VoteState {
    /// The two entries being voted on, in queue order.
    pub pair: (Entry, Entry),
    /// None until the first vote is cast.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tally: Option<Tally>,
}

impl VoteState {
    /// Open a pairing with no votes.
    pub fn new(a: impl Into<Entry>, b: impl Into<Entry>) -> Self {
        Self {
            pair: (a.into(), b.into()),
            tally: None,
        }
    }

    /// Same pairing with the given counts installed as its tally.
    pub fn with_tally<I, E>(self, counts: I) -> Self
    where
        I: IntoIterator<Item = (E, u32)>,
        E: Into<Entry>,
    {
        Self {
            tally: Some(counts.into_iter().map(|(e, n)| (e.into(), n)).collect()),
            ..self
        }
    }

    pub fn contains(&self, entry: &Entry) -> bool {
        self.pair.0 == *entry || self.pair.1 == *entry
    }

    /// Votes for `entry`; absent from the tally counts as zero.
    pub fn votes_for(&self, entry: &Entry) -> u32 {
        self.tally
            .as_ref()
            .and_then(|t| t.get(entry))
            .copied()
            .unwrap_or(0)
    }
}

/// Root state of one tournament.
///
/// At most one of `vote` and `winner` is set. Once `winner` is set, `entries` and `vote` are gone.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentState {
    /// Entries waiting to be paired, front first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entries: Option<VecDeque<Entry>>,
    /// The open pairing, if voting is in progress.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote: Option<VoteState>,
    /// Set only in the terminal state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<Entry>,
}

impl TournamentState {
    /// Empty state: no entries, no vote, no winner.
    pub fn new() -> Self {
        Self::default()
    }

    /// State with the given queue and nothing else (e.g. for seeding or tests).
    pub fn with_entries<I, E>(entries: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Entry>,
    {
        Self {
            entries: Some(entries.into_iter().map(Into::into).collect()),
            ..Self::new()
        }
    }

    /// Same state with `vote` replaced.
    pub fn with_vote(self, vote: VoteState) -> Self {
        Self {
            vote: Some(vote),
            ..self
        }
    }

    /// Number of entries waiting in the queue (not counting the open pairing).
    pub fn queued(&self) -> usize {
        self.entries.as_ref().map_or(0, VecDeque::len)
    }
}
