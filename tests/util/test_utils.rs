use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use satchel::server::{model::app::AppState, router::routes};
use satchel_test_utils::TestContext;
use tower::ServiceExt;

pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;

    /// Full API router backed by this context's database and media root.
    fn router(&self) -> Router;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        self.to_app_state()
    }

    fn router(&self) -> Router {
        routes().with_state(self.into_app_state())
    }
}

/// Sends one request through the router, returning the status and raw body.
pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, body.to_vec())
}

/// Sends one request and parses the response body as JSON.
pub async fn send_json(router: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let (status, body) = send(router, request).await;
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);

    (status, json)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::delete(uri).body(Body::empty()).unwrap()
}
