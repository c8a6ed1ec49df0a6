use super::{CourseId, GroupId};
use serde::{Deserialize, Serialize};

/// An academic group enrolled in an ordered list of courses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub semester: u32,
    pub course_ids: Vec<CourseId>,
}

impl Group {
    pub fn new(id: GroupId, semester: u32, course_ids: impl IntoIterator<Item = CourseId>) -> Self {
        Self {
            id,
            semester,
            course_ids: course_ids.into_iter().collect(),
        }
    }
}
