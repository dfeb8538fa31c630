use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::models::{Category, Course};

/// Courses grouped by category; keys iterate in tab precedence order and
/// every group is ordered by `(seq_no, id)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoursePartition {
    groups: BTreeMap<Category, Vec<Course>>,
}

impl CoursePartition {
    pub fn categories(&self) -> Vec<Category> {
        self.groups.keys().copied().collect()
    }

    pub fn first_category(&self) -> Option<Category> {
        self.groups.keys().next().copied()
    }

    pub fn contains(&self, category: Category) -> bool {
        self.groups.contains_key(&category)
    }

    pub fn courses(&self, category: Category) -> &[Course] {
        self.groups
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[Course])> {
        self.groups.iter().map(|(category, courses)| (*category, courses.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Every course, group after group.
    pub fn flatten(&self) -> Vec<Course> {
        self.groups.values().flatten().cloned().collect()
    }
}

pub fn compare_by_seq_no(a: &Course, b: &Course) -> Ordering {
    a.seq_no.cmp(&b.seq_no).then_with(|| a.id.cmp(&b.id))
}

pub fn sort_courses_by_seq_no(courses: &mut [Course]) {
    courses.sort_by(compare_by_seq_no);
}

pub fn partition(courses: &[Course]) -> CoursePartition {
    let mut groups: BTreeMap<Category, Vec<Course>> = BTreeMap::new();

    for course in courses {
        groups.entry(course.category).or_default().push(course.clone());
    }

    for group in groups.values_mut() {
        sort_courses_by_seq_no(group);
    }

    CoursePartition { groups }
}
