#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
    pub params: HashMap<String, String>,
    pub body: Option<Value>,
}

#[derive(Default)]
struct Backend {
    courses: BTreeMap<u64, Value>,
    lessons: Vec<Value>,
    requests: Vec<RecordedRequest>,
    fail_saves_with: Option<u16>,
}

type Shared = Arc<Mutex<Backend>>;

/// In-process stand-in for the course backend.
pub struct FixtureServer {
    pub addr: SocketAddr,
    state: Shared,
}

impl FixtureServer {
    pub async fn start() -> Self {
        Self::start_with(courses(), lessons()).await
    }

    pub async fn start_with(courses: Vec<Value>, lessons: Vec<Value>) -> Self {
        let backend = Backend {
            courses: courses
                .into_iter()
                .map(|c| (c["id"].as_u64().expect("course id"), c))
                .collect(),
            lessons,
            ..Default::default()
        };
        let state: Shared = Arc::new(Mutex::new(backend));

        let app = Router::new()
            .route("/api/courses", get(list_courses))
            .route("/api/courses/{id}", get(get_course).put(save_course))
            .route("/api/lessons", get(list_lessons))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fixture server");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("fixture server");
        });

        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn fail_saves_with(&self, status: u16) {
        self.state.lock().unwrap().fail_saves_with = Some(status);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn stored_course(&self, id: u64) -> Option<Value> {
        self.state.lock().unwrap().courses.get(&id).cloned()
    }
}

async fn list_courses(State(state): State<Shared>) -> Json<Value> {
    let mut backend = state.lock().unwrap();
    backend.requests.push(RecordedRequest {
        method: "GET",
        path: "/api/courses".to_string(),
        params: HashMap::new(),
        body: None,
    });
    let payload: Vec<Value> = backend.courses.values().cloned().collect();
    Json(json!({ "payload": payload }))
}

async fn get_course(State(state): State<Shared>, Path(id): Path<u64>) -> Response {
    let mut backend = state.lock().unwrap();
    backend.requests.push(RecordedRequest {
        method: "GET",
        path: format!("/api/courses/{}", id),
        params: HashMap::new(),
        body: None,
    });
    match backend.courses.get(&id) {
        Some(course) => Json(course.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn save_course(
    State(state): State<Shared>,
    Path(id): Path<u64>,
    Json(changes): Json<Value>,
) -> Response {
    let mut backend = state.lock().unwrap();
    backend.requests.push(RecordedRequest {
        method: "PUT",
        path: format!("/api/courses/{}", id),
        params: HashMap::new(),
        body: Some(changes.clone()),
    });

    if let Some(status) = backend.fail_saves_with {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return (status, "Save course failed").into_response();
    }

    match backend.courses.get_mut(&id) {
        Some(course) => {
            merge(course, &changes);
            Json(course.clone()).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn list_lessons(
    State(state): State<Shared>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let mut backend = state.lock().unwrap();
    backend.requests.push(RecordedRequest {
        method: "GET",
        path: "/api/lessons".to_string(),
        params: params.clone(),
        body: None,
    });

    let parsed = (|| {
        let course_id: u64 = params.get("courseId")?.parse().ok()?;
        let page_number: usize = params.get("pageNumber")?.parse().ok()?;
        let page_size: usize = params.get("pageSize")?.parse().ok()?;
        Some((course_id, page_number, page_size))
    })();
    let Some((course_id, page_number, page_size)) = parsed else {
        return StatusCode::BAD_REQUEST.into_response();
    };
    let filter = params.get("filter").map(|f| f.to_lowercase()).unwrap_or_default();
    let descending = params.get("sortOrder").map(String::as_str) == Some("desc");

    let mut lessons: Vec<Value> = backend
        .lessons
        .iter()
        .filter(|l| l["courseId"].as_u64() == Some(course_id))
        .filter(|l| {
            l["description"]
                .as_str()
                .is_some_and(|d| d.to_lowercase().contains(&filter))
        })
        .cloned()
        .collect();
    lessons.sort_by_key(|l| l["seqNo"].as_i64());
    if descending {
        lessons.reverse();
    }

    let page: Vec<Value> = lessons
        .into_iter()
        .skip(page_number * page_size)
        .take(page_size)
        .collect();
    Json(json!({ "payload": page })).into_response()
}

fn merge(target: &mut Value, changes: &Value) {
    match (target, changes) {
        (Value::Object(target), Value::Object(changes)) => {
            for (key, value) in changes {
                merge(target.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (target, value) => *target = value.clone(),
    }
}

pub fn course(id: u64, description: &str, category: &str, seq_no: i64, lessons_count: u32) -> Value {
    json!({
        "id": id,
        "titles": { "description": description },
        "iconUrl": format!("https://images.example.test/courses/{}.png", id),
        "courseListIcon": "https://images.example.test/icons/angular.svg",
        "category": category,
        "lessonsCount": lessons_count,
        "seqNo": seq_no
    })
}

pub fn courses() -> Vec<Value> {
    vec![
        course(1, "Serverless Angular with Firebase Course", "ADVANCED", 4, 10),
        course(2, "Angular Core Deep Dive", "BEGINNER", 1, 10),
        course(3, "RxJs In Practice Course", "BEGINNER", 2, 10),
        course(4, "NgRx (with NgRx Data) - The Complete Guide", "BEGINNER", 3, 10),
        course(5, "Angular for Beginners", "BEGINNER", 4, 10),
        course(6, "Angular Security Course", "ADVANCED", 0, 10),
        course(7, "Angular PWA - Progressive Web Apps Course", "ADVANCED", 1, 8),
        course(8, "Angular Advanced Library Laboratory: Build Your Own Library", "ADVANCED", 2, 8),
        course(9, "The Complete Typescript Course", "BEGINNER", 5, 8),
        course(10, "Rxjs and Reactive Patterns Angular Architecture Course", "ADVANCED", 3, 10),
        course(11, "Angular Material Course", "BEGINNER", 6, 10),
        course(12, "Angular Testing Course", "BEGINNER", 0, 10),
    ]
}

pub fn lesson(id: u64, course_id: u64, seq_no: i64, description: &str) -> Value {
    json!({
        "id": id,
        "courseId": course_id,
        "description": description,
        "seqNo": seq_no,
        "duration": "5:00"
    })
}

pub fn lessons() -> Vec<Value> {
    let testing = [
        "Angular Testing Course - Helicopter View",
        "Setting Up the Development Environment",
        "Introduction to Jasmine, Spies and specs",
        "Introduction to Service Testing",
        "Settting up the Angular TestBed",
        "Mocking Angular HTTP requests",
        "Simulating Failing HTTP Requests",
        "Testing Material Components",
        "Testing Async Code - Introduction",
        "Using the Angular testing utilities",
    ];

    let mut lessons = Vec::new();
    let mut next_id = 1;
    for (i, description) in testing.iter().enumerate() {
        lessons.push(lesson(next_id, 12, i as i64 + 1, description));
        next_id += 1;
    }
    for course_id in 1..12 {
        for seq_no in 1..=5 {
            lessons.push(lesson(
                next_id,
                course_id,
                seq_no,
                &format!("Course {} lesson {}", course_id, seq_no),
            ));
            next_id += 1;
        }
    }
    lessons
}
