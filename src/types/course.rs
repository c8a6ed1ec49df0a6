use super::CourseId;
use serde::{Deserialize, Serialize};

/// Credit threshold at which a course is treated as a special long-form
/// offering (e.g. an industrial residency) that only needs two weekly
/// sessions regardless of its nominal credit load (§4.2).
const LONG_FORM_CREDITS_THRESHOLD: u32 = 600;

/// A course offering: a (code, credits, semester) tuple plus whether it
/// needs a professor assigned at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub code: String,
    pub credits: u32,
    pub semester: u32,
    pub requires_professor: bool,
}

impl Course {
    pub fn new(
        id: CourseId,
        name: impl Into<String>,
        code: impl Into<String>,
        credits: u32,
        semester: u32,
        requires_professor: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            code: code.into(),
            credits,
            semester,
            requires_professor,
        }
    }

    /// §4.2: N = 2 for long-form courses (credits >= 600), else
    /// N = max(1, credits / 15) using integer division.
    pub fn session_count(&self) -> u32 {
        if self.credits >= LONG_FORM_CREDITS_THRESHOLD {
            2
        } else {
            (self.credits / 15).max(1)
        }
    }
}
