//! Assignment state (§3, §4.3): the dense occupancy tensor plus the
//! auxiliary structures the constraint predicates and the scoring
//! heuristic read from on every candidate check.

use crate::types::{CourseId, DenseIndex};
use std::collections::HashMap;

/// `A[professor][slot][group]`, flattened row-major, plus the auxiliaries
/// kept in step with it.
///
/// Sessions for courses with `requires_professor == false` never write into
/// the professor dimension at all (see DESIGN.md); `group_slot_occupied`
/// is the uniform signal for "is this group already booked at this slot"
/// that covers both professor-taught and professor-less placements.
pub struct AssignmentState {
    num_professors: usize,
    num_slots: usize,
    num_groups: usize,
    tensor: Vec<Option<CourseId>>,

    /// `group_slot_occupied[group * num_slots + slot]`.
    group_slot_occupied: Vec<bool>,
    /// `prof_slot_occupied[professor * num_slots + slot]`.
    prof_slot_occupied: Vec<bool>,

    /// §4.4 diversity aux: courses a professor has already taught a group,
    /// keyed by (group dense index, professor dense index).
    courses_by_prof_group: HashMap<(DenseIndex, DenseIndex), Vec<CourseId>>,
    /// §4.6 scoring aux: how many sessions a group already carries on a
    /// given day, keyed by (group dense index, day).
    load_group_day: HashMap<(DenseIndex, u8), u32>,

    /// §4.4 cohesion aux: the professor who taught the first session of a
    /// (group, course) pair, which every later session of the same pair
    /// must match. Keyed by (group dense index, course id).
    course_professor: HashMap<(DenseIndex, CourseId), DenseIndex>,

    /// §4.4 per_day_quota for `requires_professor == false` sessions, which
    /// have no professor dimension to scan. Keyed by (group, day, course).
    no_prof_day_course_count: HashMap<(DenseIndex, u8, CourseId), u32>,
}

impl AssignmentState {
    pub fn new(num_professors: usize, num_slots: usize, num_groups: usize) -> Self {
        Self {
            num_professors,
            num_slots,
            num_groups,
            tensor: vec![None; num_professors * num_slots * num_groups],
            group_slot_occupied: vec![false; num_groups * num_slots],
            prof_slot_occupied: vec![false; num_professors * num_slots],
            courses_by_prof_group: HashMap::new(),
            load_group_day: HashMap::new(),
            course_professor: HashMap::new(),
            no_prof_day_course_count: HashMap::new(),
        }
    }

    pub fn no_prof_sessions_on_day(&self, g: DenseIndex, day: u8, course_id: CourseId) -> u32 {
        self.no_prof_day_course_count
            .get(&(g, day, course_id))
            .copied()
            .unwrap_or(0)
    }

    /// §4.4 cohesion: the professor already committed to teaching this
    /// (group, course) pair, if any session of it has been placed yet.
    pub fn committed_professor(&self, g: DenseIndex, course_id: CourseId) -> Option<DenseIndex> {
        self.course_professor.get(&(g, course_id)).copied()
    }

    fn tensor_index(&self, p: DenseIndex, t: DenseIndex, g: DenseIndex) -> usize {
        debug_assert!(p < self.num_professors && t < self.num_slots && g < self.num_groups);
        (p * self.num_slots + t) * self.num_groups + g
    }

    pub fn cell(&self, p: DenseIndex, t: DenseIndex, g: DenseIndex) -> Option<CourseId> {
        self.tensor[self.tensor_index(p, t, g)]
    }

    /// True iff any professor has booked group `g` at slot `t`. Used by the
    /// professor-taught path; prefer [`Self::group_busy`] for a check that
    /// also covers professor-less placements.
    pub fn group_booked_via_tensor(&self, t: DenseIndex, g: DenseIndex) -> bool {
        (0..self.num_professors).any(|p| self.cell(p, t, g).is_some())
    }

    /// I2: is group `g` already committed at slot `t`, by any means.
    pub fn group_busy(&self, g: DenseIndex, t: DenseIndex) -> bool {
        self.group_slot_occupied[g * self.num_slots + t]
    }

    /// I1: is professor `p` already teaching someone at slot `t`.
    pub fn prof_busy(&self, p: DenseIndex, t: DenseIndex) -> bool {
        self.prof_slot_occupied[p * self.num_slots + t]
    }

    pub fn courses_taught(&self, g: DenseIndex, p: DenseIndex) -> &[CourseId] {
        self.courses_by_prof_group
            .get(&(g, p))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn load_on_day(&self, g: DenseIndex, day: u8) -> u32 {
        self.load_group_day.get(&(g, day)).copied().unwrap_or(0)
    }

    /// Books a professor-taught session into the tensor and every aux
    /// structure it affects.
    pub fn place_with_professor(
        &mut self,
        p: DenseIndex,
        t: DenseIndex,
        g: DenseIndex,
        day: u8,
        course_id: CourseId,
    ) {
        let idx = self.tensor_index(p, t, g);
        debug_assert!(self.tensor[idx].is_none());
        self.tensor[idx] = Some(course_id);
        self.prof_slot_occupied[p * self.num_slots + t] = true;
        self.group_slot_occupied[g * self.num_slots + t] = true;
        self.courses_by_prof_group
            .entry((g, p))
            .or_default()
            .push(course_id);
        self.course_professor.entry((g, course_id)).or_insert(p);
        *self.load_group_day.entry((g, day)).or_insert(0) += 1;
    }

    /// Books a `requires_professor == false` session: no professor row is
    /// touched, only the group-level occupancy and load counters.
    pub fn place_without_professor(
        &mut self,
        t: DenseIndex,
        g: DenseIndex,
        day: u8,
        course_id: CourseId,
    ) {
        self.group_slot_occupied[g * self.num_slots + t] = true;
        *self.load_group_day.entry((g, day)).or_insert(0) += 1;
        *self
            .no_prof_day_course_count
            .entry((g, day, course_id))
            .or_insert(0) += 1;
    }

    /// Reverts a professor-taught placement. Used only by the backtracking
    /// solver's LIFO undo.
    pub fn remove_with_professor(
        &mut self,
        p: DenseIndex,
        t: DenseIndex,
        g: DenseIndex,
        day: u8,
        course_id: CourseId,
    ) {
        let idx = self.tensor_index(p, t, g);
        self.tensor[idx] = None;
        self.prof_slot_occupied[p * self.num_slots + t] = false;
        self.group_slot_occupied[g * self.num_slots + t] = false;
        if let Some(taught) = self.courses_by_prof_group.get_mut(&(g, p)) {
            if let Some(pos) = taught.iter().position(|c| *c == course_id) {
                taught.remove(pos);
            }
            if !taught.iter().any(|c| *c == course_id) {
                self.course_professor.remove(&(g, course_id));
            }
        }
        if let Some(load) = self.load_group_day.get_mut(&(g, day)) {
            *load = load.saturating_sub(1);
        }
    }

    pub fn remove_without_professor(
        &mut self,
        t: DenseIndex,
        g: DenseIndex,
        day: u8,
        course_id: CourseId,
    ) {
        self.group_slot_occupied[g * self.num_slots + t] = false;
        if let Some(load) = self.load_group_day.get_mut(&(g, day)) {
            *load = load.saturating_sub(1);
        }
        if let Some(count) = self.no_prof_day_course_count.get_mut(&(g, day, course_id)) {
            *count = count.saturating_sub(1);
        }
    }

    /// §4.4 per_day_quota(g, c, day, p): how many sessions of `course_id`
    /// this professor has already placed for this group on this day.
    pub fn sessions_on_day_for_course(
        &self,
        p: DenseIndex,
        g: DenseIndex,
        day: u8,
        course_id: CourseId,
        day_of: impl Fn(DenseIndex) -> u8,
    ) -> u32 {
        (0..self.num_slots)
            .filter(|&t| day_of(t) == day && self.cell(p, t, g) == Some(course_id))
            .count() as u32
    }
}
