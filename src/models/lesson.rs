use serde::{Deserialize, Serialize};

use crate::models::CourseId;

pub type LessonId = u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: LessonId,
    pub course_id: CourseId,
    pub description: String,
    pub seq_no: i64,
    #[serde(default)]
    pub duration: String,
}
