//! Session generation (§4.2) and priority ordering (§4.5).

use crate::types::{ClassSession, Course, CourseId, Group, GroupId, SessionId};
use std::collections::HashMap;
use std::num::NonZeroU32;

/// Expands each group's enrolled courses into individual weekly sessions.
/// A course with unknown id (not present in `courses_by_id`) is skipped;
/// the caller is expected to have validated referential integrity before
/// calling this (the builder does, via the index).
pub fn generate_sessions(
    groups: &[Group],
    courses_by_id: &HashMap<CourseId, &Course>,
) -> Vec<ClassSession> {
    let mut sessions = Vec::new();
    let mut next_id: u32 = 1;

    for group in groups {
        for &course_id in &group.course_ids {
            let Some(course) = courses_by_id.get(&course_id) else {
                continue;
            };
            let count = course.session_count();
            for session_number in 1..=count {
                let id = SessionId(NonZeroU32::new(next_id).expect("session counter never hits 0"));
                next_id += 1;
                sessions.push(ClassSession::new(
                    id,
                    course_id,
                    group.id,
                    course.credits,
                    session_number,
                ));
            }
        }
    }

    sessions
}

/// §4.5 priority sort: the lexicographic key (-credits, +course_id,
/// +session_number) exactly as specified — sessions for heavier courses
/// are placed first (the most-constrained-first heuristic: a course with
/// more weekly sessions to place has fewer safe slots left by the time
/// the solver gets to it, so scheduling it early avoids starving it),
/// then ascending course id groups a course's own sessions together, then
/// ascending session number puts session 1 before its successors so
/// cohesion can be established on it and propagated. `sort_by` is stable,
/// so any remaining tie (the same course id shared by sessions from two
/// different groups) keeps `generate_sessions`'s own emission order —
/// the spec's "ties broken by session id, which is assigned in
/// generation order" — without needing group id as an explicit key.
pub fn sort_by_priority(sessions: &mut [ClassSession]) {
    sessions.sort_by(|a, b| {
        b.credits
            .cmp(&a.credits)
            .then_with(|| a.course_id.cmp(&b.course_id))
            .then_with(|| a.session_number.cmp(&b.session_number))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cid(n: u32) -> CourseId {
        CourseId(NonZeroU32::new(n).unwrap())
    }
    fn gid(n: u32) -> GroupId {
        GroupId(NonZeroU32::new(n).unwrap())
    }

    #[test]
    fn generates_expected_session_count_per_course() {
        let course = Course::new(cid(1), "Algebra", "ALG", 30, 1, true);
        let courses_by_id: HashMap<CourseId, &Course> = [(cid(1), &course)].into_iter().collect();
        let group = Group::new(gid(1), 1, [cid(1)]);
        let sessions = generate_sessions(&[group], &courses_by_id);
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].session_number, 1);
        assert_eq!(sessions[1].session_number, 2);
    }

    #[test]
    fn long_form_course_always_gets_two_sessions() {
        let course = Course::new(cid(1), "Residency", "RES", 900, 1, true);
        let courses_by_id: HashMap<CourseId, &Course> = [(cid(1), &course)].into_iter().collect();
        let group = Group::new(gid(1), 1, [cid(1)]);
        let sessions = generate_sessions(&[group], &courses_by_id);
        assert_eq!(sessions.len(), 2);
    }

    #[test]
    fn priority_sort_orders_by_credits_descending() {
        let light = Course::new(cid(1), "Light", "LGT", 15, 1, true);
        let heavy = Course::new(cid(2), "Heavy", "HVY", 60, 1, true);
        let courses_by_id: HashMap<CourseId, &Course> =
            [(cid(1), &light), (cid(2), &heavy)].into_iter().collect();
        let group = Group::new(gid(1), 1, [cid(1), cid(2)]);
        let mut sessions = generate_sessions(&[group], &courses_by_id);
        sort_by_priority(&mut sessions);
        assert_eq!(sessions[0].course_id, cid(2));
        assert!(sessions.iter().take(4).all(|s| s.course_id == cid(2)));
    }
}
