use std::{path::Path, sync::Arc};

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use test_utils::fixture::payload::{self, FormPairs};
use tower::ServiceExt;

use crate::server::{
    config::CredentialPresence,
    data::{
        mock::{MockGateway, Reply},
        PersistenceGateway,
    },
    startup,
    state::AppState,
};

mod diagnostic;
mod submission;

fn app(gateway: Arc<dyn PersistenceGateway>, static_root: &Path) -> Router {
    startup::build_app(AppState::new(
        gateway,
        static_root.to_path_buf(),
        CredentialPresence::default(),
    ))
}

fn mock_app(gateway: MockGateway) -> Router {
    app(Arc::new(gateway), Path::new("."))
}

fn form_post(uri: &str, pairs: &FormPairs) -> Request<Body> {
    let body = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();

    Request::post(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

fn json_post(uri: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

/// Sends one request and returns the status with the raw body.
async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, body.to_vec())
}

async fn send_json(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, body) = send(app, request).await;

    (status, serde_json::from_slice(&body).unwrap())
}
