//! Backtracking solver (§4.8): an exhaustive, completeness-seeking
//! alternative to the greedy solver, intended for instances small enough
//! to afford it. Unlike the greedy tiers, backtracking enforces no
//! diversity, quota, or cohesion constraint beyond the conflict graph and
//! a professor's own slot occupancy — it trades the greedy solver's
//! quality heuristics for the ability to undo a bad early choice.

use crate::index::TimetableIndex;
use crate::predicates::competency_ok;
use crate::state::AssignmentState;
use crate::types::{ClassSession, Course, CourseId, GroupId, TimeSlotId};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Adjacency list keyed by session index: sessions sharing a group
/// conflict with one another, since a group can attend only one session
/// per slot regardless of which professor (or none) teaches it.
fn build_conflict_graph(sessions: &[ClassSession]) -> Vec<Vec<usize>> {
    let mut by_group: HashMap<GroupId, Vec<usize>> = HashMap::new();
    for (i, session) in sessions.iter().enumerate() {
        by_group.entry(session.group_id).or_default().push(i);
    }

    let mut graph = vec![Vec::new(); sessions.len()];
    for members in by_group.values() {
        for &i in members {
            for &j in members {
                if i != j {
                    graph[i].push(j);
                }
            }
        }
    }
    graph
}

/// True iff some neighbor of session `i` in the conflict graph already
/// holds `slot_id`.
fn neighbor_holds_slot(
    sessions: &[ClassSession],
    graph: &[Vec<usize>],
    i: usize,
    slot_id: TimeSlotId,
) -> bool {
    graph[i]
        .iter()
        .any(|&j| sessions[j].assigned_slot_id == Some(slot_id))
}

/// Runs the backtracking solver over `sessions` (expected already in
/// priority order, matching the greedy path, so both solvers explore the
/// same deterministic sequence). Mutates `state` and the sessions' own
/// assignment fields in place. Returns true iff every session was placed;
/// a `false` result means the search unwound completely and every
/// session is back to unassigned — either genuine infeasibility or the
/// deadline expiring before a complete assignment was found.
///
/// A `deadline` of zero disables the wall-clock check, matching §5.
pub fn solve(
    idx: &TimetableIndex,
    state: &mut AssignmentState,
    sessions: &mut [ClassSession],
    courses_by_id: &HashMap<CourseId, &Course>,
    deadline: Duration,
) -> bool {
    let graph = build_conflict_graph(sessions);
    let start = Instant::now();
    let deadline_enabled = !deadline.is_zero();
    recurse(
        idx,
        state,
        sessions,
        courses_by_id,
        &graph,
        start,
        deadline,
        deadline_enabled,
        0,
    )
}

#[allow(clippy::too_many_arguments)]
fn recurse(
    idx: &TimetableIndex,
    state: &mut AssignmentState,
    sessions: &mut [ClassSession],
    courses_by_id: &HashMap<CourseId, &Course>,
    graph: &[Vec<usize>],
    start: Instant,
    deadline: Duration,
    deadline_enabled: bool,
    i: usize,
) -> bool {
    if deadline_enabled && start.elapsed() >= deadline {
        return false;
    }
    if i == sessions.len() {
        return true;
    }

    let Some(course) = courses_by_id.get(&sessions[i].course_id) else {
        return recurse(
            idx,
            state,
            sessions,
            courses_by_id,
            graph,
            start,
            deadline,
            deadline_enabled,
            i + 1,
        );
    };
    let Some(g) = idx.group_index(sessions[i].group_id) else {
        return recurse(
            idx,
            state,
            sessions,
            courses_by_id,
            graph,
            start,
            deadline,
            deadline_enabled,
            i + 1,
        );
    };

    if !course.requires_professor {
        for t in 0..idx.num_slots() {
            let slot_id = idx.time_slots[t].id;
            if neighbor_holds_slot(sessions, graph, i, slot_id) {
                continue;
            }

            let day = idx.day_of(t);
            state.place_without_professor(t, g, day, course.id);
            sessions[i].assign(slot_id, None);

            if recurse(
                idx,
                state,
                sessions,
                courses_by_id,
                graph,
                start,
                deadline,
                deadline_enabled,
                i + 1,
            ) {
                return true;
            }

            state.remove_without_professor(t, g, day, course.id);
            sessions[i].unassign();
        }
        return false;
    }

    for p in 0..idx.num_professors() {
        let professor = &idx.professors[p];
        if !competency_ok(professor, course) {
            continue;
        }
        for t in 0..idx.num_slots() {
            let slot_id = idx.time_slots[t].id;
            if !professor.is_available(slot_id) {
                continue;
            }
            if state.prof_busy(p, t) || neighbor_holds_slot(sessions, graph, i, slot_id) {
                continue;
            }

            let day = idx.day_of(t);
            state.place_with_professor(p, t, g, day, course.id);
            sessions[i].assign(slot_id, Some(professor.id));

            if recurse(
                idx,
                state,
                sessions,
                courses_by_id,
                graph,
                start,
                deadline,
                deadline_enabled,
                i + 1,
            ) {
                return true;
            }

            state.remove_with_professor(p, t, g, day, course.id);
            sessions[i].unassign();
        }
    }

    false
}
