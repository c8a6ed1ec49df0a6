//! Greedy solver (§4.7): one pass over priority-sorted sessions, each
//! placed under the strictest relaxation tier that yields a legal slot.
//!
//! REDESIGN FLAG R1: `requires_professor == false` sessions bypass the
//! professor loop and tiers entirely. The original only honored the flag
//! in the backtracking solver; here it is honored uniformly.

use crate::index::TimetableIndex;
use crate::predicates::{
    availability_ok, cohesion_ok, competency_ok, diversity_ok, group_conflict,
    per_day_quota_ok, per_day_quota_ok_no_professor, professor_conflict, strict_adjacent_ok,
};
use crate::scoring::best_candidate;
use crate::state::AssignmentState;
use crate::types::{
    ClassSession, ConsecutivenessMode, Course, CourseId, DenseIndex, SolverConfig, TierHistogram,
};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// §5: the greedy solver re-checks its wall-clock deadline every this
/// many sessions, rather than before every single one, to keep the check
/// itself from dominating a large instance's run time.
const DEADLINE_CHECK_INTERVAL: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tier {
    Strict,
    RelaxedQuota,
    DroppedCompetency,
    DroppedBoth,
}

impl Tier {
    /// Tiers attempted in order; the first two are always tried, the last
    /// two only when the caller allows emergency relaxation.
    const ALL: [Tier; 4] = [
        Tier::Strict,
        Tier::RelaxedQuota,
        Tier::DroppedCompetency,
        Tier::DroppedBoth,
    ];

    fn enforces_competency(self) -> bool {
        matches!(self, Tier::Strict | Tier::RelaxedQuota)
    }

    fn enforces_quota(self) -> bool {
        matches!(self, Tier::Strict | Tier::DroppedCompetency)
    }

    fn enforces_diversity(self) -> bool {
        matches!(self, Tier::Strict | Tier::RelaxedQuota)
    }

    fn is_emergency(self) -> bool {
        matches!(self, Tier::DroppedCompetency | Tier::DroppedBoth)
    }
}

/// Runs the greedy solver over `sessions` (expected already priority
/// sorted) in place, mutating `state` and each session's assignment
/// fields. Returns the tier usage histogram. A zero `deadline` disables
/// the wall-clock check entirely, matching §5.
pub fn solve(
    idx: &TimetableIndex,
    state: &mut AssignmentState,
    sessions: &mut [ClassSession],
    courses_by_id: &HashMap<CourseId, &Course>,
    config: &SolverConfig,
    deadline: Duration,
) -> TierHistogram {
    let mut tiers = TierHistogram::default();
    let deadline_enabled = !deadline.is_zero();
    let start = Instant::now();

    for (i, session) in sessions.iter_mut().enumerate() {
        if deadline_enabled
            && i % DEADLINE_CHECK_INTERVAL == 0
            && start.elapsed() >= deadline
        {
            break;
        }

        let Some(course) = courses_by_id.get(&session.course_id) else {
            continue;
        };
        let Some(g) = idx.group_index(session.group_id) else {
            continue;
        };

        if !course.requires_professor {
            if place_without_professor(idx, state, session, g, course.id) {
                tiers.strict += 1;
            }
            continue;
        }

        if let Some(tier) = place_with_professor(idx, state, session, g, course, config) {
            match tier {
                Tier::Strict => tiers.strict += 1,
                Tier::RelaxedQuota => tiers.relaxed_quota += 1,
                Tier::DroppedCompetency => tiers.dropped_competency += 1,
                Tier::DroppedBoth => tiers.dropped_both += 1,
            }
        }
    }

    tiers
}

fn place_without_professor(
    idx: &TimetableIndex,
    state: &mut AssignmentState,
    session: &mut ClassSession,
    g: DenseIndex,
    course_id: CourseId,
) -> bool {
    let candidates = (0..idx.num_slots()).filter(|&t| {
        !group_conflict(state, g, t) && per_day_quota_ok_no_professor(state, g, idx.day_of(t), course_id)
    });

    let Some(t) = best_candidate(state, idx, g, candidates) else {
        return false;
    };

    let day = idx.day_of(t);
    state.place_without_professor(t, g, day, course_id);
    session.assign(idx.time_slots[t].id, None);
    true
}

fn place_with_professor(
    idx: &TimetableIndex,
    state: &mut AssignmentState,
    session: &mut ClassSession,
    g: DenseIndex,
    course: &Course,
    config: &SolverConfig,
) -> Option<Tier> {
    for tier in Tier::ALL {
        if tier.is_emergency() && !config.allow_emergency_tiers {
            continue;
        }
        // Tier 2 only ever relaxes the quota for a session that follows
        // session 1 of its (group, course) pair; running it for session 1
        // would let the quota-free tier place the anchor session that
        // cohesion (and every later session) then has to follow (§4.7).
        if tier == Tier::RelaxedQuota && session.session_number <= 1 {
            continue;
        }

        // §4.7: "Within a tier, iterate professors in input order; for
        // each, iterate scored candidate slots" — a true professor-outer
        // loop. Professor 1 (input order) wins this tier as soon as any
        // legal slot exists for them, even if professor 2 would have
        // offered a better-scored one; only when professor 1 has no legal
        // slot at all does the search move on to professor 2. This is
        // what locks in which professor a (group, course) pair's cohesion
        // commits to, so professor order — not slot score — decides
        // ties between professors.
        for p in 0..idx.num_professors() {
            let professor = &idx.professors[p];
            if tier.enforces_competency() && !competency_ok(professor, course) {
                continue;
            }

            let candidates = (0..idx.num_slots()).filter(|&t| {
                if professor_conflict(state, p, t) || group_conflict(state, g, t) {
                    return false;
                }
                if !availability_ok(professor, idx.time_slots[t].id) {
                    return false;
                }
                if tier.enforces_diversity() && !diversity_ok(state, g, p, course.id) {
                    return false;
                }
                if !cohesion_ok(state, g, p, course.id) {
                    return false;
                }
                if tier.enforces_quota()
                    && !per_day_quota_ok(state, idx, p, g, idx.day_of(t), course.id)
                {
                    return false;
                }
                if config.consecutiveness == ConsecutivenessMode::StrictAdjacent
                    && !strict_adjacent_ok(state, idx, p, g, t, course.id)
                {
                    return false;
                }
                true
            });

            if let Some(t) = best_candidate(state, idx, g, candidates) {
                let day = idx.day_of(t);
                state.place_with_professor(p, t, g, day, course.id);
                session.assign(idx.time_slots[t].id, Some(professor.id));
                return Some(tier);
            }
        }
    }

    None
}
