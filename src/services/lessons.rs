use tracing::{debug, warn};

use crate::catalog::CatalogClient;
use crate::error::CatalogError;
use crate::models::{CourseId, Lesson};
use crate::query::{LessonQuery, SortOrder};

/// Paging state of the lesson table on a course-detail view.
#[derive(Debug, Clone)]
pub struct LessonPager {
    course_id: CourseId,
    filter: String,
    sort_order: SortOrder,
    page_number: i64,
    page_size: i64,
    lessons: Vec<Lesson>,
}

impl LessonPager {
    pub fn new(course_id: CourseId, page_size: i64) -> Result<Self, CatalogError> {
        // validates page_size up front
        LessonQuery::new(course_id, "", SortOrder::Asc, 0, page_size)?;

        Ok(Self {
            course_id,
            filter: String::new(),
            sort_order: SortOrder::Asc,
            page_number: 0,
            page_size,
            lessons: Vec::new(),
        })
    }

    pub fn course_id(&self) -> CourseId {
        self.course_id
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn page_number(&self) -> i64 {
        self.page_number
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    pub fn query(&self) -> Result<LessonQuery, CatalogError> {
        LessonQuery::new(
            self.course_id,
            &self.filter,
            self.sort_order,
            self.page_number,
            self.page_size,
        )
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
        self.page_number = 0;
    }

    pub fn set_sort_order(&mut self, sort_order: SortOrder) {
        self.sort_order = sort_order;
        self.page_number = 0;
    }

    pub fn next_page(&mut self) {
        self.page_number += 1;
    }

    pub fn previous_page(&mut self) {
        self.page_number = (self.page_number - 1).max(0);
    }

    /// Fetches the current page. The previous page stays visible on error.
    pub async fn load(&mut self, client: &dyn CatalogClient) -> Result<&[Lesson], CatalogError> {
        let query = self.query()?;
        match client.find_lessons(&query).await {
            Ok(lessons) => {
                debug!(
                    "Course {} page {}: {} lessons",
                    self.course_id,
                    self.page_number,
                    lessons.len()
                );
                self.lessons = lessons;
                Ok(&self.lessons)
            }
            Err(err) => {
                warn!("Failed to load lessons for course {}: {}", self.course_id, err);
                Err(err)
            }
        }
    }
}
