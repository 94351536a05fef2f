#![allow(dead_code)]

use axum::{
    http::{header, Request},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tedx_site::{app, config::Config, AppState};
use tower::ServiceExt;
use wiremock::MockServer;

pub fn site(server: &MockServer) -> Router {
    let config = Config::with_api_base_url(&server.uri());
    app(AppState::new(config).unwrap())
}

/// Successful API envelope around `data`.
pub fn envelope(data: Value) -> Value {
    json!({ "success": true, "data": data })
}

pub fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

pub fn get_with_cookie(uri: &str, cookie: &str) -> Request<String> {
    Request::builder()
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(String::new())
        .unwrap()
}

pub fn post(uri: &str, cookie: Option<&str>) -> Request<String> {
    let mut builder = Request::builder().method("POST").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(String::new()).unwrap()
}

/// POST the way the page script does, asking for JSON.
pub fn post_json(uri: &str, cookie: Option<&str>) -> Request<String> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::ACCEPT, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(String::new()).unwrap()
}

pub fn post_form(uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(body.to_string())
        .unwrap()
}

pub async fn send(app: &Router, request: Request<String>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
