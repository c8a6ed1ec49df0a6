use super::TimeSlotId;
use serde::{Deserialize, Serialize};

/// A fixed weekly time window: a day plus a start and end clock time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: TimeSlotId,
    /// Day of week, 1=Mon .. 5=Fri.
    pub day: u8,
    pub start_h: u8,
    pub start_m: u8,
    pub end_h: u8,
    pub end_m: u8,
}

impl TimeSlot {
    pub fn new(id: TimeSlotId, day: u8, start_h: u8, start_m: u8, end_h: u8, end_m: u8) -> Self {
        Self {
            id,
            day,
            start_h,
            start_m,
            end_h,
            end_m,
        }
    }

    /// (start_h, start_m) as a single comparable key, for the within-day total order.
    pub fn start_key(&self) -> (u8, u8) {
        (self.start_h, self.start_m)
    }

    pub fn end_key(&self) -> (u8, u8) {
        (self.end_h, self.end_m)
    }

    /// True iff `other` immediately follows `self` on the same day — the
    /// adjacency relation used by §4.4's next-slot relation and §4.6's scoring.
    pub fn immediately_precedes(&self, other: &TimeSlot) -> bool {
        self.day == other.day && self.end_key() == other.start_key()
    }
}
