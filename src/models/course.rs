use std::fmt;

use serde::{Deserialize, Serialize};

pub type CourseId = u64;

/// Course categories, declared in tab precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Beginner,
    Advanced,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Beginner, Category::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Beginner => "BEGINNER",
            Category::Advanced => "ADVANCED",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseTitles {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub titles: CourseTitles,
    pub icon_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_list_icon: Option<String>,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lessons_count: Option<u32>,
    #[serde(default)]
    pub seq_no: i64,
}

/// Partial update body for `PUT /api/courses/{id}`; absent fields stay untouched server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub titles: Option<CourseTitlesChanges>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_list_icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seq_no: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseTitlesChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
}

impl CourseChanges {
    pub fn with_description(description: impl Into<String>) -> Self {
        Self {
            titles: Some(CourseTitlesChanges {
                description: Some(description.into()),
                long_description: None,
            }),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == CourseChanges::default()
    }
}
