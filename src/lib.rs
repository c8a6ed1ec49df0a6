//! Timetable engine - constraint-satisfaction scheduler for university
//! course sections.
//!
//! Given a set of time slots, professors, courses, and student groups,
//! this crate assigns each group's required course sessions a time slot
//! (and, where the course needs one, a qualified professor) while
//! honoring professor availability, avoiding double-booking, spreading
//! sessions of the same course across distinct days, and keeping same-day
//! repeats of a course clustered rather than scattered.
//!
//! # Algorithm overview
//!
//! 1. **Index building** ([`index`]): caller-supplied entities, keyed by
//!    external id, are compacted into dense 0-based indices.
//! 2. **Session generation** ([`session_gen`]): each (group, course) pair
//!    expands into one [`types::ClassSession`] per credit-hour, priority-sorted.
//! 3. **Solving** ([`greedy`] or [`backtracking`]): sessions are placed
//!    into the `professor x slot x group` assignment tensor
//!    ([`state::AssignmentState`]) one at a time, subject to the
//!    constraint predicates in [`predicates`].
//! 4. **Extraction**: placed sessions are read back out as
//!    [`types::Assignment`] tuples.
//!
//! [`builder::TimetableBuilder`] is the only entry point a caller needs;
//! it drives all four phases from a single `solve` call.
//!
//! # Example
//!
//! ```
//! use timetable_engine::TimetableBuilder;
//!
//! let mut builder = TimetableBuilder::new();
//! builder.add_time_slot(1, 1, 8, 0, 9, 0).unwrap();
//! builder.add_professor(1, "Dr. Alvarez", &[1], &["MATH101".to_string()]).unwrap();
//! builder.add_course(1, "Calculus I", "MATH101", 15, 1, true).unwrap();
//! builder.add_group(1, 1, &[1]).unwrap();
//!
//! let report = builder.solve(5.0).unwrap();
//! assert!(report.any_assigned());
//! println!("{} sessions placed", report.assigned_sessions);
//! ```

pub mod backtracking;
pub mod builder;
pub mod error;
pub mod greedy;
pub mod index;
pub mod predicates;
pub mod scoring;
pub mod session_gen;
pub mod state;
pub mod types;

pub use builder::TimetableBuilder;
pub use error::{Result, SchedulerError};
pub use types::{
    Assignment, ClassSession, ConsecutivenessMode, Course, CourseId, Group, GroupId, Professor,
    ProfessorId, SolveReport, SolveStrategy, SolverConfig, TierHistogram, TimeSlot, TimeSlotId,
};
