//! Index builder (§4.1): turns caller-supplied entities, keyed by external
//! id, into dense 0-based indices the solver tensor can use directly.

use crate::error::SchedulerError;
use crate::types::{
    Course, CourseId, DenseIndex, Group, GroupId, Professor, ProfessorId, TimeSlot, TimeSlotId,
};
use std::collections::HashMap;

/// Bidirectional external-id <-> dense-index mapping for the four entity
/// kinds, plus the slot adjacency table the scoring heuristic and the
/// strict-adjacent consecutiveness mode both read from.
pub struct TimetableIndex {
    pub professors: Vec<Professor>,
    pub time_slots: Vec<TimeSlot>,
    pub groups: Vec<Group>,
    pub courses: Vec<Course>,

    professor_ids: HashMap<ProfessorId, DenseIndex>,
    slot_ids: HashMap<TimeSlotId, DenseIndex>,
    group_ids: HashMap<GroupId, DenseIndex>,
    course_ids: HashMap<CourseId, DenseIndex>,

    /// `next_slot[i]` is the dense index of the slot that immediately
    /// follows slot `i` on the same day, if any.
    next_slot: Vec<Option<DenseIndex>>,
    /// `day_of[i]` is the day-of-week of slot `i`, cached for the per-day
    /// quota predicate and the load-balancing scorer.
    day_of: Vec<u8>,
}

macro_rules! index_by {
    ($entities:expr, $kind:literal, $id_ty:ty, |$e:ident| $id_expr:expr) => {{
        let mut map: HashMap<$id_ty, DenseIndex> = HashMap::with_capacity($entities.len());
        for (idx, $e) in $entities.iter().enumerate() {
            let id: $id_ty = $id_expr;
            if map.insert(id, idx).is_some() {
                return Err(SchedulerError::DuplicateId {
                    kind: $kind,
                    id: id.get(),
                });
            }
        }
        map
    }};
}

impl TimetableIndex {
    /// Builds the dense index from caller-order entity lists. Dense index
    /// `i` is simply the position of an entity within its input slice, so
    /// iteration order over professors (and hence greedy tie-breaking) is
    /// exactly the order the caller passed them in.
    pub fn build(
        professors: Vec<Professor>,
        time_slots: Vec<TimeSlot>,
        groups: Vec<Group>,
        courses: Vec<Course>,
    ) -> Result<Self, SchedulerError> {
        let professor_ids = index_by!(professors, ProfessorId::KIND, ProfessorId, |p| p.id);
        let slot_ids = index_by!(time_slots, TimeSlotId::KIND, TimeSlotId, |t| t.id);
        let group_ids = index_by!(groups, GroupId::KIND, GroupId, |g| g.id);
        let course_ids = index_by!(courses, CourseId::KIND, CourseId, |c| c.id);

        let day_of = time_slots.iter().map(|t| t.day).collect();
        let next_slot = Self::build_adjacency(&time_slots);

        Ok(Self {
            professors,
            time_slots,
            groups,
            courses,
            professor_ids,
            slot_ids,
            group_ids,
            course_ids,
            next_slot,
            day_of,
        })
    }

    fn build_adjacency(time_slots: &[TimeSlot]) -> Vec<Option<DenseIndex>> {
        let mut next = vec![None; time_slots.len()];
        for (i, a) in time_slots.iter().enumerate() {
            for (j, b) in time_slots.iter().enumerate() {
                if i != j && a.immediately_precedes(b) {
                    next[i] = Some(j);
                    break;
                }
            }
        }
        next
    }

    pub fn num_professors(&self) -> usize {
        self.professors.len()
    }

    pub fn num_slots(&self) -> usize {
        self.time_slots.len()
    }

    pub fn num_groups(&self) -> usize {
        self.groups.len()
    }

    pub fn professor_index(&self, id: ProfessorId) -> Option<DenseIndex> {
        self.professor_ids.get(&id).copied()
    }

    pub fn slot_index(&self, id: TimeSlotId) -> Option<DenseIndex> {
        self.slot_ids.get(&id).copied()
    }

    pub fn group_index(&self, id: GroupId) -> Option<DenseIndex> {
        self.group_ids.get(&id).copied()
    }

    pub fn course_index(&self, id: CourseId) -> Option<DenseIndex> {
        self.course_ids.get(&id).copied()
    }

    pub fn day_of(&self, slot_idx: DenseIndex) -> u8 {
        self.day_of[slot_idx]
    }

    /// §4.4's next-slot relation, in dense-index form.
    pub fn next_slot(&self, slot_idx: DenseIndex) -> Option<DenseIndex> {
        self.next_slot[slot_idx]
    }
}
