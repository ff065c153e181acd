//! Tournament state transitions: set entries, advance to the next pairing, vote, and the reducer.

mod advance;
mod reducer;
mod set_entries;
mod vote;

pub use advance::next;
pub use reducer::{apply, reduce};
pub use set_entries::set_entries;
pub use vote::vote;
