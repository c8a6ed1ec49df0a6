mod config;
mod course;
mod group;
mod professor;
mod session;
mod solution;
mod time_slot;

pub use config::*;
pub use course::*;
pub use group::*;
pub use professor::*;
pub use session::*;
pub use solution::*;
pub use time_slot::*;

use std::fmt;
use std::num::NonZeroU32;

/// Common surface shared by every external id newtype, so generic code
/// (e.g. the builder's duplicate-id check) can work across all of them
/// without knowing which concrete type it has.
pub trait ExternalId: Copy {
    const KIND: &'static str;
    fn raw(&self) -> u32;
}

macro_rules! external_id {
    ($name:ident, $kind:literal) => {
        /// External identifier supplied by the caller. Zero is rejected at ingest
        /// (see `SchedulerError::ZeroId`), so the tensor can use `0` as a future
        /// niche without ever colliding with a real id.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        pub struct $name(pub NonZeroU32);

        impl $name {
            pub const KIND: &'static str = $kind;

            /// Parses a raw external id, rejecting zero.
            pub fn new(raw: u32) -> Result<Self, crate::error::SchedulerError> {
                NonZeroU32::new(raw)
                    .map($name)
                    .ok_or(crate::error::SchedulerError::ZeroId { kind: $kind })
            }

            pub fn get(&self) -> u32 {
                self.0.get()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl ExternalId for $name {
            const KIND: &'static str = $kind;

            fn raw(&self) -> u32 {
                self.0.get()
            }
        }
    };
}

external_id!(TimeSlotId, "time slot");
external_id!(ProfessorId, "professor");
external_id!(CourseId, "course");
external_id!(GroupId, "group");
external_id!(SessionId, "session");

/// Dense 0-based index assigned by the index builder (§4.1). Distinct from the
/// caller-supplied external id so the tensor can be indexed by plain `usize`.
pub type DenseIndex = usize;
