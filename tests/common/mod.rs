#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use wikiquiz::{backend::BackendClient, router, AppState};

/// Serve a stub backend on an ephemeral port and return its base URL.
pub async fn spawn_backend(routes: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind stub backend");
    let addr = listener.local_addr().expect("stub backend address");
    tokio::spawn(async move {
        axum::serve(listener, routes)
            .await
            .expect("stub backend stopped");
    });
    format!("http://{addr}")
}

/// The frontend app wired against the given stub backend.
pub async fn app_with_backend(backend_routes: Router) -> Router {
    let base_url = spawn_backend(backend_routes).await;
    router(AppState::new(BackendClient::new(base_url)))
}

/// A three-question record matching the wire format of the backend.
/// Correct answers are A, X, C; picking the first option everywhere
/// therefore scores 2 out of 3.
pub fn sample_record(id: i64) -> Value {
    json!({
        "id": id,
        "url": "https://en.wikipedia.org/wiki/Alan_Turing",
        "title": "Alan Turing",
        "summary": "English mathematician and computer scientist.",
        "sections": ["Early life", "Cryptanalysis", "Legacy"],
        "key_entities": { "people": ["Alan Turing"], "places": ["Bletchley Park"] },
        "quiz": [
            {
                "question": "First question?",
                "options": ["A", "B"],
                "answer": "A",
                "explanation": "First explanation.",
                "difficulty": "easy"
            },
            {
                "question": "Second question?",
                "options": ["B", "X"],
                "answer": "X",
                "explanation": "Second explanation.",
                "difficulty": "medium"
            },
            {
                "question": "Third question?",
                "options": ["C", "D"],
                "answer": "C",
                "explanation": "Third explanation.",
                "difficulty": "hard"
            }
        ],
        "related_topics": ["Enigma_machine"]
    })
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<(&str, String)>,
) -> (StatusCode, String) {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("HX-Request", "true");
    let body = match body {
        Some((content_type, payload)) => {
            builder = builder.header("content-type", content_type);
            Body::from(payload)
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).expect("request build should succeed"))
        .await
        .expect("router should respond");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    let text = String::from_utf8(bytes.to_vec()).expect("body should be utf-8");
    (status, text)
}

/// GET a page, asserting success, returning the rendered markup.
pub async fn get(app: &Router, uri: &str) -> String {
    let (status, body) = send(app, Method::GET, uri, None).await;
    assert_eq!(status, StatusCode::OK, "GET {uri} failed: {body}");
    body
}

/// POST with an empty body (htmx action), asserting success.
pub async fn post(app: &Router, uri: &str) -> String {
    let (status, body) = send(app, Method::POST, uri, None).await;
    assert_eq!(status, StatusCode::OK, "POST {uri} failed: {body}");
    body
}

/// POST a form-urlencoded body, asserting success.
pub async fn post_form(app: &Router, uri: &str, form: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        uri,
        Some(("application/x-www-form-urlencoded", form.to_string())),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "POST {uri} failed: {body}");
    body
}

/// Pull the attempt token out of a rendered attempt page.
pub fn extract_attempt_token(markup: &str) -> String {
    let start = markup
        .find("/attempt/")
        .expect("markup should contain an attempt URL")
        + "/attempt/".len();
    markup[start..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect()
}

pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
