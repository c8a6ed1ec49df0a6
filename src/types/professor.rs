use super::{ProfessorId, TimeSlotId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A professor with their availability window and teaching competencies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Professor {
    pub id: ProfessorId,
    pub name: String,
    /// Slots at which this professor can be scheduled.
    pub available_slots: HashSet<TimeSlotId>,
    /// Course codes (not course ids) this professor is qualified to teach.
    pub teachable_codes: HashSet<String>,
}

impl Professor {
    pub fn new(
        id: ProfessorId,
        name: impl Into<String>,
        available_slots: impl IntoIterator<Item = TimeSlotId>,
        teachable_codes: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            available_slots: available_slots.into_iter().collect(),
            teachable_codes: teachable_codes.into_iter().collect(),
        }
    }

    /// §4.4 availability(p, t).
    pub fn is_available(&self, slot_id: TimeSlotId) -> bool {
        self.available_slots.contains(&slot_id)
    }

    /// Whether this professor's competencies include the given course code.
    pub fn can_teach_code(&self, code: &str) -> bool {
        self.teachable_codes.contains(code)
    }
}
