//! Reusable test helpers for HTTP integration tests.
//!
//! Provides `TestApp` for building and sending requests through the full axum router.
#![allow(dead_code)]

use axum::body::Body;
use axum::http::{self, header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use url::form_urlencoded;
use awkawk_server::api::{create_router, AppState};
use awkawk_server::config::Config;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    /// Create a test app with no shared secret.
    pub fn new() -> Self {
        Self::with_config(Config::default_for_test())
    }

    /// Create a test app with a custom config.
    pub fn with_config(config: Config) -> Self {
        Self {
            router: create_router(AppState::new(config)),
        }
    }

    /// Create a test app that requires `token`.
    pub fn with_token(token: &str) -> Self {
        Self::with_config(Config::with_token(token))
    }

    pub fn request(method: Method, uri: &str) -> http::request::Builder {
        Request::builder().method(method).uri(uri)
    }

    /// Send a request through the router via `tower::ServiceExt::oneshot`.
    pub async fn oneshot(&self, request: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("oneshot request failed")
    }

    /// POST a raw urlencoded body to `/`.
    pub async fn post_form(&self, body: &str) -> Response<Body> {
        let request = Self::request(Method::POST, "/")
            .header(header::CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");
        self.oneshot(request).await
    }
}

/// Encode form fields the way a chat integration would.
pub fn form(fields: &[(&str, &str)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields)
        .finish()
}

pub async fn body_to_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .expect("Failed to collect response body")
        .to_bytes()
        .to_vec()
}

pub async fn body_to_json(response: Response<Body>) -> serde_json::Value {
    let bytes = body_to_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap_or_else(|e| {
        let preview = String::from_utf8_lossy(&bytes);
        panic!("Failed to parse response as JSON: {e}\nBody: {preview}")
    })
}
