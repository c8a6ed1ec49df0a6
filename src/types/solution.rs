use super::{CourseId, GroupId, ProfessorId, SessionId, TimeSlotId};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One placed session, as handed back by the extractor (§4.9).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub session_id: SessionId,
    pub group_id: GroupId,
    pub course_id: CourseId,
    pub slot_id: TimeSlotId,
    /// `None` for a course with `requires_professor == false`.
    pub professor_id: Option<ProfessorId>,
}

/// Which relaxation tier (§4.7) a greedy placement ultimately succeeded
/// under. Unused by the backtracking solver, which has no tiers.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TierHistogram {
    pub strict: u32,
    pub relaxed_quota: u32,
    pub dropped_competency: u32,
    pub dropped_both: u32,
}

impl TierHistogram {
    pub fn total(&self) -> u32 {
        self.strict + self.relaxed_quota + self.dropped_competency + self.dropped_both
    }
}

/// Outcome of a `solve` call: the distilled §6 boolean success signal
/// ([`Self::any_assigned`]), plus the counts, timing and tier usage a
/// caller needs to judge solution quality and decide whether to retry
/// with a different strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveReport {
    pub assigned_sessions: u32,
    pub total_sessions: u32,
    #[serde(with = "duration_secs")]
    pub elapsed: Duration,
    pub tiers: TierHistogram,
    /// RFC3339 timestamp the solve finished at, for callers that log or
    /// persist reports and need to tell two runs of the same instance apart.
    pub generated_at: String,
}

impl SolveReport {
    /// True iff every generated session received a slot.
    pub fn is_complete(&self) -> bool {
        self.assigned_sessions == self.total_sessions
    }

    /// §6's `solve -> bool` contract: true iff at least one session was
    /// assigned. This, not [`Self::is_complete`], is the distilled spec's
    /// boolean success signal — a solve can be "complete" only because
    /// zero sessions were generated, and can be a legitimate partial
    /// success without ever being "complete".
    pub fn any_assigned(&self) -> bool {
        self.assigned_sessions > 0
    }
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        d.as_secs_f64().serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        f64::deserialize(d).map(Duration::from_secs_f64)
    }
}
