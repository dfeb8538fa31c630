use tracing::{debug, info, warn};

use crate::catalog::CatalogClient;
use crate::error::CatalogError;
use crate::models::{Category, Course, CourseChanges, CourseId};
use crate::services::partition::{CoursePartition, partition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabState {
    Loading,
    Ready { active: Category },
    Empty,
}

/// Which category tab is visible, and the courses behind each tab.
///
/// Owned by a single view. A failed fetch leaves the controller in
/// `Loading`; the caller gets the error back and decides how to show it.
#[derive(Debug)]
pub struct TabController {
    state: TabState,
    courses: Vec<Course>,
    partition: CoursePartition,
}

impl Default for TabController {
    fn default() -> Self {
        Self::new()
    }
}

impl TabController {
    pub fn new() -> Self {
        Self {
            state: TabState::Loading,
            courses: Vec::new(),
            partition: CoursePartition::default(),
        }
    }

    pub fn state(&self) -> TabState {
        self.state
    }

    pub fn active_category(&self) -> Option<Category> {
        match self.state {
            TabState::Ready { active } => Some(active),
            TabState::Loading | TabState::Empty => None,
        }
    }

    pub fn available_categories(&self) -> Vec<Category> {
        self.partition.categories()
    }

    pub fn partition(&self) -> &CoursePartition {
        &self.partition
    }

    pub fn courses_for(&self, category: Category) -> &[Course] {
        self.partition.courses(category)
    }

    pub fn active_courses(&self) -> &[Course] {
        match self.active_category() {
            Some(category) => self.partition.courses(category),
            None => &[],
        }
    }

    pub fn course(&self, id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Back to `Loading` ahead of a fresh fetch.
    pub fn reset(&mut self) {
        self.state = TabState::Loading;
        self.courses.clear();
        self.partition = CoursePartition::default();
    }

    pub fn on_courses_loaded(&mut self, courses: Vec<Course>) {
        self.partition = partition(&courses);
        self.courses = courses;
        self.state = match self.partition.first_category() {
            Some(active) => TabState::Ready { active },
            None => TabState::Empty,
        };
        debug!(
            "Loaded {} courses into {} tabs: {:?}",
            self.courses.len(),
            self.partition.len(),
            self.state
        );
    }

    pub fn on_load_failed(&mut self, err: &CatalogError) {
        warn!("Course fetch failed, staying in {:?}: {}", self.state, err);
    }

    /// Unknown categories, and calls outside `Ready`, are ignored.
    pub fn select_category(&mut self, category: Category) {
        if let TabState::Ready { .. } = self.state {
            if self.partition.contains(category) {
                self.state = TabState::Ready { active: category };
            } else {
                debug!("Ignoring selection of unavailable category {}", category);
            }
        }
    }

    pub async fn load(&mut self, client: &dyn CatalogClient) -> Result<(), CatalogError> {
        self.reset();
        match client.find_all_courses().await {
            Ok(courses) => {
                self.on_courses_loaded(courses);
                Ok(())
            }
            Err(err) => {
                self.on_load_failed(&err);
                Err(err)
            }
        }
    }

    /// Saves through `client` and swaps in the server's copy once it
    /// confirms. On failure the held courses are left as they were.
    pub async fn save_course(
        &mut self,
        client: &dyn CatalogClient,
        id: CourseId,
        changes: &CourseChanges,
    ) -> Result<Course, CatalogError> {
        let saved = client.save_course(id, changes).await?;
        self.apply_saved(saved.clone());
        info!("Course {} updated in view", id);
        Ok(saved)
    }

    fn apply_saved(&mut self, saved: Course) {
        match self.courses.iter_mut().find(|c| c.id == saved.id) {
            Some(existing) => *existing = saved,
            None => self.courses.push(saved),
        }
        self.partition = partition(&self.courses);

        self.state = match self.state {
            TabState::Ready { active } if self.partition.contains(active) => {
                TabState::Ready { active }
            }
            TabState::Loading => TabState::Loading,
            _ => match self.partition.first_category() {
                Some(active) => TabState::Ready { active },
                None => TabState::Empty,
            },
        };
    }
}
