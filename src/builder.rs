//! Builder / facade (§4.10, §6): `TimetableBuilder` is the single public
//! entry point. It accumulates domain records, rejects id `0` and
//! duplicate ids outright (stricter than the distilled spec's
//! silently-accept stance, a deliberate hardening — see DESIGN.md), and
//! drives index construction, session generation, and the selected
//! solver from `solve`.

use crate::backtracking;
use crate::error::SchedulerError;
use crate::greedy;
use crate::index::TimetableIndex;
use crate::session_gen::{generate_sessions, sort_by_priority};
use crate::state::AssignmentState;
use crate::types::{
    Assignment, ClassSession, Course, CourseId, ExternalId, Group, GroupId, Professor,
    ProfessorId, SolveReport, SolveStrategy, SolverConfig, TimeSlot, TimeSlotId,
};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::time::Instant;

/// Accumulates ingest and orchestrates a solve. Domain records are
/// write-once: nothing added via `add_*` can be removed, matching §3's
/// "appended during ingest, read-only thereafter" lifecycle.
#[derive(Debug, Default)]
pub struct TimetableBuilder {
    time_slots: Vec<TimeSlot>,
    professors: Vec<Professor>,
    courses: Vec<Course>,
    groups: Vec<Group>,
    config: SolverConfig,
    sessions: Vec<ClassSession>,
    solution: Vec<Assignment>,
}

impl TimetableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the default solver configuration (§4.12). Must be
    /// called before [`Self::solve`].
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn add_time_slot(
        &mut self,
        id: u32,
        day: u8,
        start_h: u8,
        start_m: u8,
        end_h: u8,
        end_m: u8,
    ) -> Result<(), SchedulerError> {
        let id = TimeSlotId::new(id)?;
        self.reject_duplicate(self.time_slots.iter().map(|t| t.id), id, TimeSlotId::KIND)?;
        self.time_slots
            .push(TimeSlot::new(id, day, start_h, start_m, end_h, end_m));
        Ok(())
    }

    pub fn add_professor(
        &mut self,
        id: u32,
        name: impl Into<String>,
        available_slot_ids: &[u32],
        teachable_course_codes: &[String],
    ) -> Result<(), SchedulerError> {
        let id = ProfessorId::new(id)?;
        self.reject_duplicate(self.professors.iter().map(|p| p.id), id, ProfessorId::KIND)?;
        let available_slots = available_slot_ids
            .iter()
            .map(|&raw| TimeSlotId::new(raw))
            .collect::<Result<Vec<_>, _>>()?;
        self.professors.push(Professor::new(
            id,
            name,
            available_slots,
            teachable_course_codes.iter().cloned(),
        ));
        Ok(())
    }

    pub fn add_course(
        &mut self,
        id: u32,
        name: impl Into<String>,
        code: impl Into<String>,
        credits: u32,
        semester: u32,
        requires_professor: bool,
    ) -> Result<(), SchedulerError> {
        let id = CourseId::new(id)?;
        self.reject_duplicate(self.courses.iter().map(|c| c.id), id, CourseId::KIND)?;
        self.courses.push(Course::new(
            id,
            name,
            code,
            credits,
            semester,
            requires_professor,
        ));
        Ok(())
    }

    pub fn add_group(
        &mut self,
        id: u32,
        semester: u32,
        course_ids: &[u32],
    ) -> Result<(), SchedulerError> {
        let id = GroupId::new(id)?;
        self.reject_duplicate(self.groups.iter().map(|g| g.id), id, GroupId::KIND)?;
        let course_ids = course_ids
            .iter()
            .map(|&raw| CourseId::new(raw))
            .collect::<Result<Vec<_>, _>>()?;
        self.groups.push(Group::new(id, semester, course_ids));
        Ok(())
    }

    fn reject_duplicate<T, I>(&self, mut existing: I, id: T, kind: &'static str) -> Result<(), SchedulerError>
    where
        T: ExternalId + PartialEq,
        I: Iterator<Item = T>,
    {
        if existing.any(|other| other == id) {
            return Err(SchedulerError::DuplicateId {
                kind,
                id: id.raw(),
            });
        }
        Ok(())
    }

    /// §4.1-§4.9: builds the dense index, generates and priority-sorts
    /// sessions, runs the configured solver, and extracts the solution.
    /// Returns a [`SolveReport`] describing how much of the instance was
    /// placed; `report.any_assigned()` is the distilled §6 boolean signal.
    pub fn solve(&mut self, deadline_seconds: f64) -> Result<SolveReport, SchedulerError> {
        let start = Instant::now();

        info!(
            "building index for {} professors, {} slots, {} groups, {} courses",
            self.professors.len(),
            self.time_slots.len(),
            self.groups.len(),
            self.courses.len()
        );
        let idx = TimetableIndex::build(
            self.professors.clone(),
            self.time_slots.clone(),
            self.groups.clone(),
            self.courses.clone(),
        )
        .map_err(|e| {
            log::error!("index build failed: {e}");
            e
        })?;

        let courses_by_id: HashMap<CourseId, &Course> =
            idx.courses.iter().map(|c| (c.id, c)).collect();

        let mut sessions = generate_sessions(&idx.groups, &courses_by_id);
        sort_by_priority(&mut sessions);
        info!("generated {} sessions", sessions.len());

        let mut state = AssignmentState::new(idx.num_professors(), idx.num_slots(), idx.num_groups());
        let mut config = self.config;
        config.deadline_secs = deadline_seconds;

        let tiers = match config.strategy {
            SolveStrategy::Greedy => {
                let tiers = greedy::solve(
                    &idx,
                    &mut state,
                    &mut sessions,
                    &courses_by_id,
                    &config,
                    config.deadline(),
                );
                if config.deadline().as_secs_f64() > 0.0 {
                    debug!(
                        "greedy solve used {} strict, {} relaxed-quota, {} dropped-competency, {} dropped-both",
                        tiers.strict, tiers.relaxed_quota, tiers.dropped_competency, tiers.dropped_both
                    );
                }
                tiers
            }
            SolveStrategy::Backtracking => {
                let completed = backtracking::solve(
                    &idx,
                    &mut state,
                    &mut sessions,
                    &courses_by_id,
                    config.deadline(),
                );
                info!("backtracking solve completed = {completed}");
                Default::default()
            }
        };

        let assigned = sessions.iter().filter(|s| s.is_assigned()).count();
        if assigned < sessions.len() {
            warn!(
                "{} of {} sessions remain unassigned after solve",
                sessions.len() - assigned,
                sessions.len()
            );
        }

        self.solution = extract_solution(&sessions);
        self.sessions = sessions;

        let elapsed = start.elapsed();
        let report = SolveReport {
            assigned_sessions: assigned as u32,
            total_sessions: self.sessions.len() as u32,
            elapsed,
            tiers,
            generated_at: chrono::Utc::now().to_rfc3339(),
        };
        info!(
            "solve finished in {:.3}s: {}/{} sessions assigned",
            report.elapsed.as_secs_f64(),
            report.assigned_sessions,
            report.total_sessions
        );

        Ok(report)
    }

    /// §4.9: the extracted (group, course, professor, slot) tuples for
    /// every session that received a placement.
    pub fn get_solution(&self) -> &[Assignment] {
        &self.solution
    }

    /// The generated sessions from the most recent [`Self::solve`] call,
    /// assigned and unassigned alike. Empty until `solve` has run once.
    pub fn sessions(&self) -> &[ClassSession] {
        &self.sessions
    }
}

/// §4.9 solution extractor: one tuple per session with a slot assigned.
/// `professor_id` stays `None` for a `requires_professor == false`
/// course, which never had one to begin with.
fn extract_solution(sessions: &[ClassSession]) -> Vec<Assignment> {
    sessions
        .iter()
        .filter_map(|s| {
            s.assigned_slot_id.map(|slot_id| Assignment {
                session_id: s.id,
                group_id: s.group_id,
                course_id: s.course_id,
                slot_id,
                professor_id: s.assigned_professor_id,
            })
        })
        .collect()
}
