//! End-to-end tests for the CMS HTTP surface

use axum::http::{header, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};

use cms_server::cms::DocumentStore;
use cms_server::config::Config;
use cms_server::state::AppState;

fn server() -> TestServer {
    let state = AppState::new(Config::default(), DocumentStore::seeded());
    TestServer::new(cms_server::app(state)).unwrap()
}

#[tokio::test]
async fn create_document_returns_id_in_body_and_header() {
    let server = server();

    let response = server
        .post("/cms/document")
        .json(&json!({"author": "Jack Tester", "title": "Testing REST APIs"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(response.header("x-created-id"), HeaderValue::from_static("3"));
    assert_eq!(response.json::<Value>(), json!({"id": 3}));
}

#[tokio::test]
async fn create_document_without_body_is_a_bad_request() {
    let server = server();

    let response = server.post("/cms/document").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let response = server.post("/cms/document").json(&Value::Null).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    // Store untouched: the next create still gets the first assignable id
    let response = server
        .post("/cms/document")
        .json(&json!({"author": "Jack Tester", "title": "Testing REST APIs"}))
        .await;
    assert_eq!(response.json::<Value>(), json!({"id": 3}));
}

#[tokio::test]
async fn get_document_returns_a_hal_resource() {
    let server = server();

    let response = server.get("/cms/document/1").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.header(header::CONTENT_TYPE),
        HeaderValue::from_static("application/hal+json")
    );
    assert_eq!(
        response.json::<Value>(),
        json!({
            "author": "Harry Smith",
            "title": "Meeting report",
            "_links": {
                "self": {"href": "/cms/document/1"},
                "all": {"href": "/cms/document"}
            }
        })
    );
}

#[tokio::test]
async fn get_unknown_document_is_not_found() {
    let server = server();

    let response = server.get("/cms/document/999").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["error"], "not_found");
}

#[tokio::test]
async fn list_documents_returns_every_stored_document() {
    let server = server();

    let response = server.get("/cms/document").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let mut authors: Vec<String> = response
        .json::<Vec<Value>>()
        .iter()
        .map(|d| d["author"].as_str().unwrap().to_string())
        .collect();
    authors.sort();
    assert_eq!(authors, ["Harry Smith", "Jack Williams"]);
}

#[tokio::test]
async fn new_documents_round_trips_the_cursor_cookie() {
    let server = server();

    // First visit: no cookie, both seed documents come back
    let response = server.get("/cms/document/new").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Vec<Value>>().len(), 2);

    let cookie = response.header(header::SET_COOKIE);
    assert_eq!(cookie, HeaderValue::from_static("lastSeenDocumentId=2"));

    // Caught up: replaying the cookie yields nothing and the cookie holds
    let response = server
        .get("/cms/document/new")
        .add_header(header::COOKIE, cookie.clone())
        .await;
    assert!(response.json::<Vec<Value>>().is_empty());
    assert_eq!(
        response.header(header::SET_COOKIE),
        HeaderValue::from_static("lastSeenDocumentId=2")
    );

    // A new document shows up on the next poll, and only that one
    server
        .post("/cms/document")
        .json(&json!({"author": "Jack Tester", "title": "Testing REST APIs"}))
        .await;

    let response = server
        .get("/cms/document/new")
        .add_header(header::COOKIE, cookie)
        .await;
    let documents = response.json::<Vec<Value>>();
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0]["author"], "Jack Tester");
    assert_eq!(
        response.header(header::SET_COOKIE),
        HeaderValue::from_static("lastSeenDocumentId=3")
    );
}

#[tokio::test]
async fn malformed_cursor_cookie_counts_as_a_first_visit() {
    let server = server();

    let response = server
        .get("/cms/document/new")
        .add_header(
            header::COOKIE,
            HeaderValue::from_static("lastSeenDocumentId=banana"),
        )
        .await;

    assert_eq!(response.json::<Vec<Value>>().len(), 2);
    assert_eq!(
        response.header(header::SET_COOKIE),
        HeaderValue::from_static("lastSeenDocumentId=2")
    );
}

#[tokio::test]
async fn healthcheck_reports_store_summary() {
    let server = server();

    let response = server.get("/cms/healthcheck").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({"status": "ok", "entryCount": 2, "distinctAuthorCount": 2})
    );
}
