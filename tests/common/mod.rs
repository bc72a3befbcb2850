#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use trivia_api::app::{create_app, AppState};
use trivia_api::config::Settings;
use trivia_api::db;
use trivia_api::domain::NewQuestion;
use trivia_api::store::Store;

pub struct TestApp {
    pub router: Router,
    pub store: Store,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

/// Full router over a fresh in-memory database
pub async fn spawn_app() -> TestApp {
    let settings = Settings::for_database("sqlite::memory:");
    let pool = db::connect(&settings.database_url, settings.database_max_connections)
        .await
        .expect("failed to create test database");
    let store = Store::new(pool);
    let router = create_app(AppState::new(store.clone(), settings));
    TestApp { router, store }
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri, None).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.request(Method::DELETE, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.send(request).await
    }

    pub async fn add_category(&self, kind: &str) -> i64 {
        self.store.insert_category(kind).await.unwrap()
    }

    pub async fn add_question(&self, text: &str, answer: &str, category: i64) -> i64 {
        self.store
            .insert_question(&NewQuestion {
                question: text.to_string(),
                answer: answer.to_string(),
                difficulty: 1,
                category,
            })
            .await
            .unwrap()
    }
}

pub fn assert_error(response: &TestResponse, code: u16, message: &str) {
    assert_eq!(response.status.as_u16(), code);
    assert_eq!(
        response.body,
        serde_json::json!({"success": false, "error": code, "message": message})
    );
}
