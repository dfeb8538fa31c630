pub mod dto;

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::CatalogError;
use crate::models::{Course, CourseChanges, CourseId, Lesson};
use crate::query::{DEFAULT_PAGE_SIZE, LessonQuery, SortOrder};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug)]
pub struct CatalogConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub page_size: i64,
}

impl CatalogConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn new_from_env() -> Result<Self, CatalogError> {
        let base_url = env::var("CATALOG_API_URL")
            .map_err(|_| CatalogError::Config("CATALOG_API_URL is not set".to_string()))?;

        let mut config = Self::new(base_url);

        if let Ok(raw) = env::var("CATALOG_TIMEOUT_SECS") {
            let secs = raw.parse::<u64>().map_err(|_| {
                CatalogError::Config(format!("CATALOG_TIMEOUT_SECS is not a number: {}", raw))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        if let Ok(raw) = env::var("CATALOG_PAGE_SIZE") {
            config.page_size = raw
                .parse::<i64>()
                .ok()
                .filter(|size| *size > 0)
                .ok_or_else(|| {
                    CatalogError::Config(format!("CATALOG_PAGE_SIZE must be a positive number: {}", raw))
                })?;
        }

        Ok(config)
    }
}

/// Data access for courses and lessons.
///
/// Every call issues at most one request and never retries or caches.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    async fn find_all_courses(&self) -> Result<Vec<Course>, CatalogError>;
    async fn find_course_by_id(&self, id: CourseId) -> Result<Course, CatalogError>;
    async fn save_course(&self, id: CourseId, changes: &CourseChanges) -> Result<Course, CatalogError>;
    async fn find_lessons(&self, query: &LessonQuery) -> Result<Vec<Lesson>, CatalogError>;

    /// Builds the query descriptor, then fetches one page. An invalid page
    /// is rejected before anything goes on the wire.
    async fn find_lessons_page(
        &self,
        course_id: CourseId,
        filter: &str,
        sort_order: SortOrder,
        page_number: i64,
        page_size: i64,
    ) -> Result<Vec<Lesson>, CatalogError> {
        let query = LessonQuery::new(course_id, filter, sort_order, page_number, page_size)?;
        self.find_lessons(&query).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    FindAllCourses,
    FindCourseById,
    SaveCourse,
    FindLessons,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::FindAllCourses => "find_all_courses",
            Operation::FindCourseById => "find_course_by_id",
            Operation::SaveCourse => "save_course",
            Operation::FindLessons => "find_lessons",
        }
    }
}

/// Maps a non-2xx status to the error the caller of `op` sees.
pub fn error_for_status(op: Operation, status: StatusCode, body: &str) -> CatalogError {
    let code = status.as_u16();
    match op {
        Operation::FindCourseById if status == StatusCode::NOT_FOUND => {
            CatalogError::NotFound { status: code }
        }
        Operation::SaveCourse if status == StatusCode::NOT_FOUND => {
            CatalogError::NotFound { status: code }
        }
        Operation::SaveCourse if status.is_client_error() => CatalogError::Validation {
            status: code,
            detail: validation_detail(body),
        },
        Operation::SaveCourse if status.is_server_error() => CatalogError::Server { status: code },
        _ => CatalogError::Transport {
            status: Some(code),
            message: format!("{} returned {}", op.name(), status),
        },
    }
}

fn validation_detail(body: &str) -> String {
    serde_json::from_str::<dto::ErrorBody>(body)
        .map(|parsed| parsed.message)
        .unwrap_or_else(|_| body.to_string())
}

pub struct CatalogHttpClient {
    client: Client,
    config: CatalogConfig,
}

impl CatalogHttpClient {
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CatalogError::Config(format!("Failed to build http client: {}", e)))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    async fn send(&self, op: Operation, request: RequestBuilder) -> Result<Response, CatalogError> {
        let response = request.send().await.map_err(|e| {
            warn!("{} failed before a response arrived: {}", op.name(), e);
            CatalogError::Transport {
                status: None,
                message: e.to_string(),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("{} failed with {}: {}", op.name(), status, body);
            return Err(error_for_status(op, status, &body));
        }

        Ok(response)
    }

    async fn read_json<T: DeserializeOwned>(op: Operation, response: Response) -> Result<T, CatalogError> {
        let body_text = response.text().await?;
        serde_json::from_str::<T>(&body_text).map_err(|e| {
            warn!("Failed to parse {} response: {}", op.name(), e);
            CatalogError::Decode(format!("{}: {}", op.name(), e))
        })
    }
}

#[async_trait]
impl CatalogClient for CatalogHttpClient {
    async fn find_all_courses(&self) -> Result<Vec<Course>, CatalogError> {
        let op = Operation::FindAllCourses;
        let url = self.url("/api/courses");
        debug!("GET {}", url);

        let response = self.send(op, self.client.get(&url)).await?;
        let envelope: dto::Envelope<Course> = Self::read_json(op, response).await?;
        debug!("Fetched {} courses", envelope.payload.len());
        Ok(envelope.payload)
    }

    async fn find_course_by_id(&self, id: CourseId) -> Result<Course, CatalogError> {
        let op = Operation::FindCourseById;
        let url = self.url(&format!("/api/courses/{}", id));
        debug!("GET {}", url);

        let response = self.send(op, self.client.get(&url)).await?;
        Self::read_json(op, response).await
    }

    async fn save_course(&self, id: CourseId, changes: &CourseChanges) -> Result<Course, CatalogError> {
        let op = Operation::SaveCourse;
        let url = self.url(&format!("/api/courses/{}", id));
        debug!("PUT {}", url);

        let response = self.send(op, self.client.put(&url).json(changes)).await?;
        let course: Course = Self::read_json(op, response).await?;
        tracing::info!("Saved course {}", course.id);
        Ok(course)
    }

    async fn find_lessons(&self, query: &LessonQuery) -> Result<Vec<Lesson>, CatalogError> {
        let op = Operation::FindLessons;
        let url = self.url("/api/lessons");
        debug!("GET {} {:?}", url, query.to_params());

        let response = self
            .send(op, self.client.get(&url).query(&query.to_params()))
            .await?;
        let envelope: dto::Envelope<Lesson> = Self::read_json(op, response).await?;

        let mut lessons = envelope.payload;
        let limit = query.limit();
        if lessons.len() > limit {
            warn!(
                "Server returned {} lessons for a page of {}, truncating",
                lessons.len(),
                limit
            );
            lessons.truncate(limit);
        }
        Ok(lessons)
    }
}

/// Client for running without a backend: lists are empty and lookups miss.
pub struct NoopCatalogClient;

#[async_trait]
impl CatalogClient for NoopCatalogClient {
    async fn find_all_courses(&self) -> Result<Vec<Course>, CatalogError> {
        Ok(Vec::new())
    }

    async fn find_course_by_id(&self, _id: CourseId) -> Result<Course, CatalogError> {
        Err(CatalogError::NotFound { status: 404 })
    }

    async fn save_course(&self, _id: CourseId, _changes: &CourseChanges) -> Result<Course, CatalogError> {
        Err(CatalogError::NotFound { status: 404 })
    }

    async fn find_lessons(&self, _query: &LessonQuery) -> Result<Vec<Lesson>, CatalogError> {
        Ok(Vec::new())
    }
}
