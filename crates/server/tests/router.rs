use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use service::diary_entry::repo::InMemoryDiaryEntryRepository;
use tower::ServiceExt;

use server::{startup::build_app, state::AppState};

fn app() -> Router {
    build_app(AppState::new(Arc::new(InMemoryDiaryEntryRepository::new())))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(res: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_is_ok() {
    let res = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await["status"], "ok");
}

#[tokio::test]
async fn post_returns_created_with_location() {
    let res = app()
        .oneshot(json_request("POST", "/api/DiaryEntries", json!({"id": 99, "title": "Day 1", "content": "hi"})))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(res.headers()[header::LOCATION], "/api/DiaryEntries/1");
    let body = body_json(res).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["title"], "Day 1");
    assert_eq!(body["version"], 1);
}

#[tokio::test]
async fn get_unknown_id_is_404() {
    let res = app()
        .oneshot(Request::builder().uri("/api/DiaryEntries/7").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(res).await["error"], "Not Found");
}

#[tokio::test]
async fn non_integer_path_id_is_json_400() {
    for uri in ["/api/DiaryEntries/abc", "/api/DiaryEntries/99999999999"] {
        let res = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert!(res.headers()[header::CONTENT_TYPE].to_str().unwrap().starts_with("application/json"));
        let body = body_json(res).await;
        assert_eq!(body["error"], "Invalid Path");
        assert!(body["detail"].is_string());
    }

    let res = app()
        .oneshot(json_request("PUT", "/api/DiaryEntries/abc", json!({"id": 1, "title": "x"})))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(res).await["error"], "Invalid Path");
}

#[tokio::test]
async fn put_with_mismatched_id_is_400() {
    let res = app()
        .oneshot(json_request("PUT", "/api/DiaryEntries/2", json!({"id": 1, "title": "x"})))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn put_unknown_id_is_404() {
    let res = app()
        .oneshot(json_request("PUT", "/api/DiaryEntries/3", json!({"id": 3, "title": "x"})))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_body_is_400() {
    let res = app()
        .oneshot(json_request("POST", "/api/DiaryEntries", json!({"content": "no title"})))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(res).await["error"], "Invalid Body");
}

#[tokio::test]
async fn stale_version_is_409() {
    let app = app();
    let res = app
        .clone()
        .oneshot(json_request("POST", "/api/DiaryEntries", json!({"title": "v1"})))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = app
        .clone()
        .oneshot(json_request("PUT", "/api/DiaryEntries/1", json!({"id": 1, "title": "v2", "version": 1})))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = app
        .oneshot(json_request("PUT", "/api/DiaryEntries/1", json!({"id": 1, "title": "late", "version": 1})))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(res).await["error"], "Concurrency Conflict");
}

#[tokio::test]
async fn openapi_document_lists_diary_paths() {
    let res = app()
        .oneshot(Request::builder().uri("/api-docs/openapi.json").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let doc = body_json(res).await;
    assert!(doc["paths"]["/api/DiaryEntries"].is_object());
    assert!(doc["paths"]["/api/DiaryEntries/{id}"]["put"].is_object());
}
