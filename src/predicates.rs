//! Constraint predicates (§4.4): pure reads of the index and assignment
//! state. None of these mutate anything; the solvers call them to decide
//! whether a candidate placement is legal before committing it.

use crate::index::TimetableIndex;
use crate::state::AssignmentState;
use crate::types::{Course, CourseId, DenseIndex, Professor};

/// Maximum sessions of the same (group, course) pair allowed on one day,
/// independent of the REDESIGN FLAG R2 consecutiveness mode.
pub const MAX_SESSIONS_PER_DAY: u32 = 2;

/// I3: professor `p` must be free at slot `t` (from their declared
/// availability window).
pub fn availability_ok(professor: &Professor, slot_id: crate::types::TimeSlotId) -> bool {
    professor.is_available(slot_id)
}

/// I1: professor `p` cannot teach two groups in the same slot.
pub fn professor_conflict(state: &AssignmentState, p: DenseIndex, t: DenseIndex) -> bool {
    state.prof_busy(p, t)
}

/// I2: group `g` cannot attend two sessions in the same slot, regardless
/// of whether either session has a professor attached.
pub fn group_conflict(state: &AssignmentState, g: DenseIndex, t: DenseIndex) -> bool {
    state.group_busy(g, t)
}

/// I4: professor `p` must be competent to teach this course's code.
pub fn competency_ok(professor: &Professor, course: &Course) -> bool {
    professor.can_teach_code(&course.code)
}

/// I5: a professor may teach a group at most one distinct course. Already
/// teaching the same course again (a later session of the same pair) is
/// fine; picking up a second, different course for the same group is not.
pub fn diversity_ok(
    state: &AssignmentState,
    g: DenseIndex,
    p: DenseIndex,
    course_id: CourseId,
) -> bool {
    state
        .courses_taught(g, p)
        .iter()
        .all(|&taught| taught == course_id)
}

/// I6: per_day_quota(g, c, day, p) — at most [`MAX_SESSIONS_PER_DAY`]
/// sessions of the same (group, course) pair taught by the same professor
/// on one day.
pub fn per_day_quota_ok(
    state: &AssignmentState,
    idx: &TimetableIndex,
    p: DenseIndex,
    g: DenseIndex,
    day: u8,
    course_id: CourseId,
) -> bool {
    let count = state.sessions_on_day_for_course(p, g, day, course_id, |t| idx.day_of(t));
    count < MAX_SESSIONS_PER_DAY
}

/// I6 variant for `requires_professor == false` sessions, which have no
/// professor dimension to scan the quota against.
pub fn per_day_quota_ok_no_professor(
    state: &AssignmentState,
    g: DenseIndex,
    day: u8,
    course_id: CourseId,
) -> bool {
    state.no_prof_sessions_on_day(g, day, course_id) < MAX_SESSIONS_PER_DAY
}

/// I7: cohesion — every session of a (group, course) pair must be taught
/// by the same professor as the first session placed for that pair.
/// Vacuously true for `requires_professor == false` courses, which never
/// commit a professor at all.
pub fn cohesion_ok(
    state: &AssignmentState,
    g: DenseIndex,
    p: DenseIndex,
    course_id: CourseId,
) -> bool {
    match state.committed_professor(g, course_id) {
        Some(committed) => committed == p,
        None => true,
    }
}

/// REDESIGN FLAG R2, `ConsecutivenessMode::StrictAdjacent`: sessions of
/// the same (group, course) pair placed on the same day must occupy
/// immediately adjacent slots. Only consulted when the caller has opted
/// into strict-adjacent mode; `PerDayQuotaOnly` never calls this.
pub fn strict_adjacent_ok(
    state: &AssignmentState,
    idx: &TimetableIndex,
    p: DenseIndex,
    g: DenseIndex,
    t: DenseIndex,
    course_id: CourseId,
) -> bool {
    let day = idx.day_of(t);
    let same_day_sessions: Vec<DenseIndex> = (0..idx.num_slots())
        .filter(|&slot| idx.day_of(slot) == day && state.cell(p, slot, g) == Some(course_id))
        .collect();
    if same_day_sessions.is_empty() {
        return true;
    }
    same_day_sessions
        .iter()
        .any(|&other| idx.next_slot(other) == Some(t) || idx.next_slot(t) == Some(other))
}
