//! Integration tests for the state transitions: seeding, advancing, and voting.

use head_to_head::{
    next, set_entries, vote, Entry, TournamentError, TournamentState, VoteState,
};
use std::collections::{BTreeSet, VecDeque};

fn queue(names: &[&str]) -> Option<VecDeque<Entry>> {
    Some(names.iter().map(|&n| Entry::new(n)).collect())
}

#[test]
fn set_entries_adds_entries_to_empty_state() {
    let mut s = TournamentState::new();
    set_entries(&mut s, ["Trainspotting", "28 Days Later"]);
    assert_eq!(s, TournamentState::with_entries(["Trainspotting", "28 Days Later"]));
}

#[test]
fn set_entries_accepts_any_collection_in_iteration_order() {
    let mut from_vec = TournamentState::new();
    set_entries(&mut from_vec, vec![String::from("B"), String::from("A")]);
    assert_eq!(from_vec.entries, queue(&["B", "A"]));

    // A set iterates in its own order; that order is what gets stored.
    let mut from_set = TournamentState::new();
    set_entries(&mut from_set, BTreeSet::from(["B", "A"]));
    assert_eq!(from_set.entries, queue(&["A", "B"]));

    let mut empty = TournamentState::new();
    set_entries(&mut empty, Vec::<Entry>::new());
    assert_eq!(empty.entries, Some(VecDeque::new()));
}

#[test]
fn set_entries_leaves_other_fields_alone() {
    let mut s = TournamentState::with_entries(["X"]).with_vote(VoteState::new("A", "B").with_tally([("A", 1)]));
    set_entries(&mut s, ["C", "D"]);
    assert_eq!(s.entries, queue(&["C", "D"]));
    assert_eq!(s.vote, Some(VoteState::new("A", "B").with_tally([("A", 1)])));
    assert_eq!(s.winner, None);
}

#[test]
fn next_takes_the_next_two_entries_under_vote() {
    let mut s = TournamentState::with_entries(["Trainspotting", "28 Days Later", "Sunshine"]);
    next(&mut s).unwrap();
    assert_eq!(
        s,
        TournamentState::with_entries(["Sunshine"]).with_vote(VoteState::new("Trainspotting", "28 Days Later"))
    );
}

#[test]
fn next_puts_winner_of_current_vote_back_to_entries() {
    let mut s = TournamentState::with_entries(["C", "D", "E"])
        .with_vote(VoteState::new("A", "B").with_tally([("A", 4), ("B", 2)]));
    next(&mut s).unwrap();
    assert_eq!(s, TournamentState::with_entries(["E", "A"]).with_vote(VoteState::new("C", "D")));
}

#[test]
fn next_puts_both_from_tied_vote_back_to_entries() {
    let mut s = TournamentState::with_entries(["C", "D", "E"])
        .with_vote(VoteState::new("A", "B").with_tally([("A", 4), ("B", 4)]));
    next(&mut s).unwrap();
    assert_eq!(s, TournamentState::with_entries(["E", "A", "B"]).with_vote(VoteState::new("C", "D")));
}

#[test]
fn next_with_no_votes_cast_keeps_both() {
    let mut s = TournamentState::with_entries(["C"]).with_vote(VoteState::new("A", "B"));
    next(&mut s).unwrap();
    assert_eq!(s, TournamentState::with_entries(["B"]).with_vote(VoteState::new("C", "A")));
}

#[test]
fn next_marks_winner_when_just_one_entry_left() {
    let mut s = TournamentState::with_entries(Vec::<Entry>::new())
        .with_vote(VoteState::new("A", "B").with_tally([("A", 4), ("B", 2)]));
    next(&mut s).unwrap();
    assert_eq!(
        s,
        TournamentState {
            winner: Some(Entry::new("A")),
            ..TournamentState::new()
        }
    );
}

#[test]
fn next_with_single_seeded_entry_declares_it_winner() {
    let mut s = TournamentState::with_entries(["Only"]);
    next(&mut s).unwrap();
    assert_eq!(s.winner, Some(Entry::new("Only")));
    assert_eq!(s.entries, None);
    assert_eq!(s.vote, None);
}

#[test]
fn next_on_empty_state_is_rejected_and_leaves_state_unchanged() {
    let mut s = TournamentState::new();
    assert_eq!(next(&mut s), Err(TournamentError::NoEntries));
    assert_eq!(s, TournamentState::new());

    let mut seeded_empty = TournamentState::with_entries(Vec::<Entry>::new());
    assert_eq!(next(&mut seeded_empty), Err(TournamentError::NoEntries));
    assert_eq!(seeded_empty, TournamentState::with_entries(Vec::<Entry>::new()));
}

#[test]
fn next_after_winner_is_rejected() {
    let mut s = TournamentState {
        winner: Some(Entry::new("A")),
        ..TournamentState::new()
    };
    let before = s.clone();
    assert_eq!(next(&mut s), Err(TournamentError::AlreadyDecided(Entry::new("A"))));
    assert_eq!(s, before);
}

#[test]
fn pairing_is_two_distinct_front_entries_removed_from_queue() {
    let mut s = TournamentState::with_entries(["A", "B", "C", "D"]);
    next(&mut s).unwrap();
    let open = s.vote.as_ref().unwrap();
    assert_ne!(open.pair.0, open.pair.1);
    assert_eq!(open.pair, (Entry::new("A"), Entry::new("B")));
    let rest = s.entries.as_ref().unwrap();
    assert!(!rest.contains(&open.pair.0));
    assert!(!rest.contains(&open.pair.1));
    assert_eq!(open.tally, None);
}

#[test]
fn full_tournament_runs_to_a_single_winner() {
    let mut s = TournamentState::new();
    set_entries(&mut s, ["A", "B", "C", "D"]);
    next(&mut s).unwrap(); // A vs B
    vote(&mut s, &Entry::new("A")).unwrap();
    next(&mut s).unwrap(); // C vs D, queue [A]
    vote(&mut s, &Entry::new("D")).unwrap();
    next(&mut s).unwrap(); // A vs D, queue []
    assert_eq!(s.vote, Some(VoteState::new("A", "D")));
    vote(&mut s, &Entry::new("D")).unwrap();
    vote(&mut s, &Entry::new("D")).unwrap();
    vote(&mut s, &Entry::new("A")).unwrap();
    next(&mut s).unwrap();
    assert_eq!(s.winner, Some(Entry::new("D")));
    assert_eq!(s.entries, None);
    assert_eq!(s.vote, None);
}

#[test]
fn vote_creates_a_tally_for_the_voted_entry() {
    let mut s = TournamentState::new().with_vote(VoteState::new("A", "B"));
    vote(&mut s, &Entry::new("A")).unwrap();
    assert_eq!(s.vote, Some(VoteState::new("A", "B").with_tally([("A", 1)])));

    vote(&mut s, &Entry::new("A")).unwrap();
    assert_eq!(s.vote, Some(VoteState::new("A", "B").with_tally([("A", 2)])));
}

#[test]
fn vote_adds_to_existing_tally() {
    let mut s = TournamentState::new().with_vote(VoteState::new("A", "B").with_tally([("A", 3), ("B", 2)]));
    vote(&mut s, &Entry::new("A")).unwrap();
    assert_eq!(s.vote, Some(VoteState::new("A", "B").with_tally([("A", 4), ("B", 2)])));
}

#[test]
fn vote_for_entry_outside_pairing_is_rejected() {
    let mut s = TournamentState::with_entries(["C"]).with_vote(VoteState::new("A", "B"));
    let before = s.clone();
    assert_eq!(
        vote(&mut s, &Entry::new("C")),
        Err(TournamentError::NotInPairing(Entry::new("C")))
    );
    assert_eq!(s, before);
}

#[test]
fn vote_without_open_pairing_is_rejected() {
    let mut s = TournamentState::with_entries(["A", "B"]);
    assert_eq!(vote(&mut s, &Entry::new("A")), Err(TournamentError::NoOpenVote));
    assert_eq!(s, TournamentState::with_entries(["A", "B"]));

    let mut decided = TournamentState {
        winner: Some(Entry::new("A")),
        ..TournamentState::new()
    };
    assert_eq!(
        vote(&mut decided, &Entry::new("A")),
        Err(TournamentError::AlreadyDecided(Entry::new("A")))
    );
}
