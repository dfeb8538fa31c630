use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::models::CourseId;

pub const DEFAULT_PAGE_SIZE: i64 = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(CatalogError::InvalidQuery(format!(
                "sort order must be \"asc\" or \"desc\", got {:?}",
                other
            ))),
        }
    }
}

/// Transport-ready parameters for one `GET /api/lessons` request.
///
/// Every field is already rendered as the string that goes on the wire.
/// A descriptor is never mutated; build a new one per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonQuery {
    course_id: String,
    filter: String,
    sort_order: String,
    page_number: String,
    page_size: String,
}

impl LessonQuery {
    pub fn new(
        course_id: CourseId,
        filter: &str,
        sort_order: SortOrder,
        page_number: i64,
        page_size: i64,
    ) -> Result<Self, CatalogError> {
        if page_number < 0 {
            return Err(CatalogError::InvalidQuery(format!(
                "page number must be >= 0, got {}",
                page_number
            )));
        }
        if page_size <= 0 {
            return Err(CatalogError::InvalidQuery(format!(
                "page size must be > 0, got {}",
                page_size
            )));
        }

        Ok(Self {
            course_id: course_id.to_string(),
            filter: filter.to_string(),
            sort_order: sort_order.to_string(),
            page_number: page_number.to_string(),
            page_size: page_size.to_string(),
        })
    }

    pub fn builder(course_id: CourseId) -> LessonQueryBuilder {
        LessonQueryBuilder::new(course_id)
    }

    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn sort_order(&self) -> &str {
        &self.sort_order
    }

    pub fn page_number(&self) -> &str {
        &self.page_number
    }

    pub fn page_size(&self) -> &str {
        &self.page_size
    }

    /// Page size as a count; validated positive at construction.
    pub fn limit(&self) -> usize {
        self.page_size.parse().unwrap_or(usize::MAX)
    }

    /// Query string pairs in a fixed order.
    pub fn to_params(&self) -> [(&'static str, &str); 5] {
        [
            ("courseId", self.course_id.as_str()),
            ("filter", self.filter.as_str()),
            ("sortOrder", self.sort_order.as_str()),
            ("pageNumber", self.page_number.as_str()),
            ("pageSize", self.page_size.as_str()),
        ]
    }
}

/// Collects the optional parts of a [`LessonQuery`]; defaults are an empty
/// filter, ascending order, the first page and [`DEFAULT_PAGE_SIZE`].
#[derive(Debug, Clone)]
pub struct LessonQueryBuilder {
    course_id: CourseId,
    filter: String,
    sort_order: SortOrder,
    page_number: i64,
    page_size: i64,
}

impl LessonQueryBuilder {
    pub fn new(course_id: CourseId) -> Self {
        Self {
            course_id,
            filter: String::new(),
            sort_order: SortOrder::Asc,
            page_number: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    pub fn sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn page_number(mut self, page_number: i64) -> Self {
        self.page_number = page_number;
        self
    }

    pub fn page_size(mut self, page_size: i64) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn build(self) -> Result<LessonQuery, CatalogError> {
        LessonQuery::new(
            self.course_id,
            &self.filter,
            self.sort_order,
            self.page_number,
            self.page_size,
        )
    }
}
