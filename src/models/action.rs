//! Action: the commands the session store accepts.

use crate::models::entry::Entry;
use serde::{Deserialize, Serialize};

/// A tagged command: `{"type": "SET_ENTRIES", "entries": [..]}`, `{"type": "NEXT"}`,
/// or `{"type": "VOTE", "entry": ".."}`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Install the candidate pool, in the given order.
    SetEntries { entries: Vec<Entry> },
    /// Close the current pairing and open the next one (or declare the winner).
    #[serde(rename = "NEXT")]
    Advance,
    /// One vote for an entry of the open pairing.
    Vote { entry: Entry },
    /// Any unrecognized `type` tag. Applying it leaves the state unchanged.
    #[serde(other)]
    Unknown,
}

impl Action {
    /// Build a `SetEntries` from any iterable of names or entries.
    pub fn set_entries<I, E>(entries: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Entry>,
    {
        Action::SetEntries {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    pub fn vote(entry: impl Into<Entry>) -> Self {
        Action::Vote {
            entry: entry.into(),
        }
    }

    /// Wire name of the action kind (for logs).
    pub fn kind(&self) -> &'static str {
        match self {
            Action::SetEntries { .. } => "SET_ENTRIES",
            Action::Advance => "NEXT",
            Action::Vote { .. } => "VOTE",
            Action::Unknown => "UNKNOWN",
        }
    }
}
