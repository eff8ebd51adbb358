// Common test utilities for the HTTP integration tests

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, Response, StatusCode},
    Router,
};
use link_guard_core::{create_router, AppConfig, AppState, ReferenceData};
use serde::Serialize;
use tower::util::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
    pub state: AppState,
}

impl TestApp {
    /// Send a POST request
    pub fn post(&self, uri: &str) -> TestRequest {
        TestRequest::new(self, "POST", uri)
    }

    /// Send a GET request
    pub fn get(&self, uri: &str) -> TestRequest {
        TestRequest::new(self, "GET", uri)
    }
}

/// Test request builder
pub struct TestRequest<'a> {
    app: &'a TestApp,
    request: Request<Body>,
}

impl<'a> TestRequest<'a> {
    fn new(app: &'a TestApp, method: &str, uri: &str) -> Self {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        Self { app, request }
    }

    /// Add JSON body to request
    pub fn json<T: Serialize>(self, body: &T) -> Self {
        let body_bytes = serde_json::to_vec(body).unwrap();
        self.raw_json(body_bytes)
    }

    /// Send arbitrary bytes as an `application/json` body
    pub fn raw_json(mut self, body: impl Into<Body>) -> Self {
        self.request = Request::builder()
            .method(self.request.method().clone())
            .uri(self.request.uri().clone())
            .header("content-type", "application/json")
            .body(body.into())
            .unwrap();
        self
    }

    /// Send the request
    pub async fn send(self) -> TestResponse {
        let response = self.app.app.clone().oneshot(self.request).await.unwrap();
        TestResponse { response }
    }
}

/// Test response wrapper
pub struct TestResponse {
    response: Response<Body>,
}

impl TestResponse {
    /// Get status code
    pub fn status(&self) -> StatusCode {
        self.response.status()
    }

    /// Parse JSON response
    pub async fn json<T: serde::de::DeserializeOwned>(self) -> T {
        let body = axum::body::to_bytes(self.response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }
}

/// Setup test application over the embedded reference data
pub fn setup_test_app() -> TestApp {
    setup_test_app_with(AppConfig::default())
}

pub fn setup_test_app_with(config: AppConfig) -> TestApp {
    let state = AppState::new(config, ReferenceData::embedded());
    TestApp {
        app: create_router(state.clone()),
        state,
    }
}
