#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;
use trivia_core::domain::CategoryId;
use trivia_server::api::{AppState, create_router};
use trivia_server::db::init_pool_and_migrate;
use trivia_server::repository::{CategoryRecord, NewQuestion};

pub const CATEGORIES: [&str; 3] = ["Science", "Entertainment", "Sports"];

/// (question, answer, category, difficulty)
pub const QUESTIONS: [(&str, &str, &str, i32); 4] = [
    (
        "What year was the first MCU movie released?",
        "2008",
        "Entertainment",
        4,
    ),
    (
        "Who is the greatest footballer of all time?",
        "Lionel Messi",
        "Sports",
        1,
    ),
    (
        "Who won the Oscars awards for best actor 2022?",
        "Will Smith",
        "Entertainment",
        3,
    ),
    (
        "What scientist was associated with the Tower of Pisa?",
        "Galileo Galilei",
        "Science",
        5,
    ),
];

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub struct TestApp {
    pub state: Arc<AppState>,
    pub categories: Vec<CategoryRecord>,
    router: Router,
    _dir: TempDir,
}

impl TestApp {
    /// Fresh SQLite database, migrated and seeded with the reference data.
    pub async fn spawn() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let database_url = format!("sqlite://{}?mode=rwc", dir.path().join("trivia.db").display());
        let db = init_pool_and_migrate(&database_url)
            .await
            .expect("database should migrate");
        let state = Arc::new(AppState::new(db));

        let mut categories = Vec::new();
        for kind in CATEGORIES {
            let category = state
                .categories
                .create(kind)
                .await
                .expect("seed category");
            categories.push(category);
        }

        let app = Self {
            router: create_router(state.clone()),
            state,
            categories,
            _dir: dir,
        };

        for (question, answer, category, difficulty) in QUESTIONS {
            app.state
                .questions
                .create(NewQuestion {
                    question: question.to_string(),
                    answer: answer.to_string(),
                    category: app.category_id(category),
                    difficulty,
                })
                .await
                .expect("seed question");
        }

        app
    }

    pub fn category_id(&self, kind: &str) -> CategoryId {
        self.categories
            .iter()
            .find(|category| category.kind == kind)
            .map(|category| category.id)
            .expect("seeded category")
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, Body::empty(), None).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(Method::DELETE, uri, Body::empty(), None).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> TestResponse {
        self.send(
            Method::POST,
            uri,
            Body::from(body.to_string()),
            Some("application/json"),
        )
        .await
    }

    pub async fn post_raw(&self, uri: &str, body: &'static str) -> TestResponse {
        self.send(Method::POST, uri, Body::from(body), Some("application/json"))
            .await
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Body,
        content_type: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::ORIGIN, "http://localhost:3000");
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        let request = builder.body(body).expect("build request");

        self.request(request).await
    }

    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("read response body")
            .to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("response body should be JSON")
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

pub fn question_ids(body: &Value) -> Vec<i64> {
    body["questions"]
        .as_array()
        .expect("questions array")
        .iter()
        .map(|question| question["id"].as_i64().expect("question id"))
        .collect()
}
