pub mod lessons;
pub mod partition;
pub mod tabs;

pub use lessons::LessonPager;
pub use partition::{CoursePartition, partition, sort_courses_by_seq_no};
pub use tabs::{TabController, TabState};
