use super::{CourseId, GroupId, ProfessorId, SessionId, TimeSlotId};
use serde::{Deserialize, Serialize};

/// One weekly hour of a course for a group — the unit of scheduling.
///
/// Created once by the session generator (§4.2) and mutated exactly once,
/// atomically, upon successful assignment (§7).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassSession {
    pub id: SessionId,
    pub course_id: CourseId,
    pub group_id: GroupId,
    pub credits: u32,
    /// 1-based position of this session within its (group, course) pair.
    pub session_number: u32,
    pub assigned_slot_id: Option<TimeSlotId>,
    pub assigned_professor_id: Option<ProfessorId>,
}

impl ClassSession {
    pub fn new(
        id: SessionId,
        course_id: CourseId,
        group_id: GroupId,
        credits: u32,
        session_number: u32,
    ) -> Self {
        Self {
            id,
            course_id,
            group_id,
            credits,
            session_number,
            assigned_slot_id: None,
            assigned_professor_id: None,
        }
    }

    /// True once this session has been placed at a slot. `assigned_professor_id`
    /// legitimately stays `None` for a course with `requires_professor == false`,
    /// so slot placement alone is the signal, not the conjunction of both fields.
    pub fn is_assigned(&self) -> bool {
        self.assigned_slot_id.is_some()
    }

    /// Atomically stamps the placement (§7: "no session is ever
    /// half-assigned"). `professor_id` is `None` for courses that don't
    /// require one; it is never a stand-in sentinel value.
    pub fn assign(&mut self, slot_id: TimeSlotId, professor_id: Option<ProfessorId>) {
        self.assigned_slot_id = Some(slot_id);
        self.assigned_professor_id = professor_id;
    }

    /// Reverts a placement. Used only by the backtracking solver's LIFO undo.
    pub fn unassign(&mut self) {
        self.assigned_slot_id = None;
        self.assigned_professor_id = None;
    }
}
