pub mod course;
pub mod lesson;

pub use course::{Category, Course, CourseChanges, CourseId, CourseTitles, CourseTitlesChanges};
pub use lesson::{Lesson, LessonId};
