//! Slot-scoring heuristic (§4.6): among several legal candidate slots for
//! a session, the greedy solver prefers the slot that sorts first under
//! [`compare_candidates`]. The comparator balances each group's daily
//! load and breaks ties in favor of slots adjacent to that group's
//! existing sessions, so a solved schedule reads as compact rather than
//! scattered.

use crate::index::TimetableIndex;
use crate::state::AssignmentState;
use crate::types::DenseIndex;
use std::cmp::Ordering;

/// Every day deserves at least this many classes before the heuristic
/// starts weighing adjacency over raw load.
const MIN_LOAD_BEFORE_BALANCING: u32 = 2;

fn load(state: &AssignmentState, idx: &TimetableIndex, g: DenseIndex, t: DenseIndex) -> u32 {
    state.load_on_day(g, idx.day_of(t))
}

/// True iff slot `t` immediately precedes or follows a slot where group
/// `g` already has some session booked (any professor, any course).
fn is_adjacent_to_group_session(
    state: &AssignmentState,
    idx: &TimetableIndex,
    g: DenseIndex,
    t: DenseIndex,
) -> bool {
    let prev_has_session = (0..idx.num_slots())
        .any(|prior| idx.next_slot(prior) == Some(t) && state.group_busy(g, prior));
    let next_has_session = idx
        .next_slot(t)
        .map(|next| state.group_busy(g, next))
        .unwrap_or(false);
    prev_has_session || next_has_session
}

/// §4.6's three-rule comparator over a pair of candidate slots. Returns
/// `Less` when `a` should be preferred over `b`.
///
/// 1. If either slot's day-load is below [`MIN_LOAD_BEFORE_BALANCING`]:
///    smaller load wins; ties favor adjacency, then (redundantly) load.
/// 2. Else if the loads differ by at most one: adjacency wins; ties favor
///    smaller load.
/// 3. Else: smaller load wins outright.
fn compare_candidates(
    state: &AssignmentState,
    idx: &TimetableIndex,
    g: DenseIndex,
    a: DenseIndex,
    b: DenseIndex,
) -> Ordering {
    let load_a = load(state, idx, g, a);
    let load_b = load(state, idx, g, b);
    let adj_a = is_adjacent_to_group_session(state, idx, g, a);
    let adj_b = is_adjacent_to_group_session(state, idx, g, b);

    // "adjacent first" as an Ordering: true must sort before false, the
    // reverse of bool's natural order, so compare b against a.
    let adjacency_order = adj_b.cmp(&adj_a);

    if load_a < MIN_LOAD_BEFORE_BALANCING || load_b < MIN_LOAD_BEFORE_BALANCING {
        load_a
            .cmp(&load_b)
            .then(adjacency_order)
            .then(load_a.cmp(&load_b))
    } else if load_a.abs_diff(load_b) <= 1 {
        adjacency_order.then(load_a.cmp(&load_b))
    } else {
        load_a.cmp(&load_b)
    }
}

/// Picks the best candidate slot under [`compare_candidates`]. Stable
/// with respect to the input order of `candidates`, so a fixed candidate
/// order yields a deterministic pick.
pub fn best_candidate<I>(
    state: &AssignmentState,
    idx: &TimetableIndex,
    g: DenseIndex,
    candidates: I,
) -> Option<DenseIndex>
where
    I: IntoIterator<Item = DenseIndex>,
{
    let mut best: Option<DenseIndex> = None;
    for t in candidates {
        best = match best {
            None => Some(t),
            Some(current) => {
                if compare_candidates(state, idx, g, t, current) == Ordering::Less {
                    Some(t)
                } else {
                    Some(current)
                }
            }
        };
    }
    best
}
