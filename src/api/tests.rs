//! End-to-end tests driving the full router.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use serde_json::{Value as JsonValue, json};
use tower::ServiceExt;

use crate::api::middleware::REQUEST_ID_HEADER;
use crate::api::routes::{OPENAPI_PATH, create_router};
use crate::config::ServerConfig;
use crate::state::AppState;
use crate::store::{
    Document, DocumentId, DocumentStore, Fields, MemoryStore, Query, StoreError, StoreResult,
};

fn app_with_store(store: Arc<dyn DocumentStore>) -> Router {
    create_router(AppState::new(store), &ServerConfig::default())
}

fn app() -> Router {
    app_with_store(Arc::new(MemoryStore::new()))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, JsonValue) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: JsonValue) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_liveness_under_base_path_and_root() {
    let app = app();
    for uri in ["/", "/api"] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(std::str::from_utf8(&bytes).unwrap(), "alive 💪");
    }
}

#[tokio::test]
async fn test_create_user_returns_persisted_user() {
    let (status, body) = send(
        &app(),
        post_json("/api/users", json!({"name": "Bob Builder"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["name"], "Bob Builder");
    assert_eq!(body["user"]["quizIds"], json!([]));
    assert!(!body["user"]["id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_user_with_empty_body_names_field() {
    let (status, body) = send(&app(), post_json("/api/users", json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["errors"][0]["field"], "name");
    assert!(body["requestId"].is_string());
}

#[tokio::test]
async fn test_invalid_user_never_reaches_store() {
    let store = Arc::new(MemoryStore::new());
    let app = app_with_store(store.clone());

    for payload in [json!({}), json!({"name": ""}), json!({"name": 7})] {
        let (status, _) = send(&app, post_json("/api/users", payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
    assert!(store.is_empty("users"));
}

#[tokio::test]
async fn test_get_user_is_idempotent() {
    let app = app();
    let (_, created) = send(&app, post_json("/api/users", json!({"name": "Ada"}))).await;
    let id = created["user"]["id"].as_str().unwrap();
    let uri = format!("/api/users/{}", id);

    let (status, first) = send(&app, get(&uri)).await;
    let (_, second) = send(&app, get(&uri)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(first, created);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_get_missing_user_echoes_id() {
    let store = Arc::new(MemoryStore::new());
    let app = app_with_store(store.clone());

    let (status, body) = send(&app, get("/api/users/doesNotExist")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"user": {"id": "doesNotExist"}}));
    assert!(store.is_empty("users"));
}

#[tokio::test]
async fn test_get_user_rejects_oversized_id() {
    let uri = format!("/api/users/{}", "a".repeat(1501));
    let (status, body) = send(&app(), get(&uri)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["field"], "user_id");
}

#[tokio::test]
async fn test_create_quiz_full_payload() {
    let (status, body) = send(
        &app(),
        post_json(
            "/api/quizzes",
            json!({
                "name": "Quiz 2",
                "description": "this is a quiz to do something",
                "active": false
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let quiz = &body["quiz"];
    assert_eq!(quiz["name"], "Quiz 2");
    assert_eq!(quiz["description"], "this is a quiz to do something");
    assert_eq!(quiz["active"], false);
    assert_eq!(quiz["userCount"], 0);
    assert!(quiz["id"].is_string());
    assert!(quiz["createdOn"].as_str().unwrap().parse::<jiff::Timestamp>().is_ok());
}

#[tokio::test]
async fn test_create_quiz_defaults() {
    let (status, body) = send(&app(), post_json("/api/quizzes", json!({"name": "Bare"}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["quiz"]["active"], false);
    assert!(body["quiz"].get("description").is_none());
}

#[tokio::test]
async fn test_create_quiz_validation() {
    let app = app();

    let (status, body) = send(&app, post_json("/api/quizzes", json!({"description": "x"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["field"], "name");

    let (status, body) =
        send(&app, post_json("/api/quizzes", json!({"name": "Q", "description": ""}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["field"], "description");

    let (status, body) = send(
        &app,
        post_json("/api/quizzes", json!({"name": "Q", "userCount": 99})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["errors"][0]["field"], "userCount");
    assert_eq!(body["errors"][0]["code"], "unknown");
}

#[tokio::test]
async fn test_wrong_field_type_is_named_in_errors() {
    let app = app();

    let (status, body) = send(&app, post_json("/api/users", json!({"name": 7}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["errors"][0]["field"], "name");
    assert_eq!(body["errors"][0]["code"], "type");
    assert!(body["requestId"].is_string());

    let (status, body) = send(
        &app,
        post_json("/api/quizzes", json!({"name": "Q", "active": "yes"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["errors"][0]["field"], "active");
    assert_eq!(body["errors"][0]["code"], "type");
}

#[tokio::test]
async fn test_list_quizzes_newest_first_limited_to_ten() {
    let app = app();
    for i in 0..11 {
        let (status, _) = send(
            &app,
            post_json("/api/quizzes", json!({"name": format!("Quiz {}", i)})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(&app, get("/api/quizzes")).await;
    assert_eq!(status, StatusCode::OK);

    let quizzes = body["quizzes"].as_array().unwrap();
    assert_eq!(quizzes.len(), 10);

    let created: Vec<jiff::Timestamp> = quizzes
        .iter()
        .map(|q| q["createdOn"].as_str().unwrap().parse().unwrap())
        .collect();
    assert!(created.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn test_list_quizzes_empty() {
    let (status, body) = send(&app(), get("/api/quizzes")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"quizzes": []}));
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/users")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\":"))
        .unwrap();
    let (status, body) = send(&app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_unknown_route_and_method_use_error_shape() {
    let app = app();

    let (status, body) = send(&app, get("/api/nothing-here")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    assert!(body["requestId"].is_string());

    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/api/quizzes")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["code"], "METHOD_NOT_ALLOWED");
}

#[tokio::test]
async fn test_request_id_header_echoed() {
    let request = Request::builder()
        .uri("/api/users/missing")
        .header(REQUEST_ID_HEADER, "trace-me")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.headers()[REQUEST_ID_HEADER], "trace-me");
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: JsonValue = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["requestId"], "trace-me");
}

#[tokio::test]
async fn test_health_and_openapi_at_root() {
    let app = app();

    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(&app, get(OPENAPI_PATH)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/quizzes"].is_object());
}

#[tokio::test]
async fn test_custom_base_path() {
    let config = ServerConfig {
        base_path: "/v1/".to_string(),
        ..Default::default()
    };
    let app = create_router(AppState::new(Arc::new(MemoryStore::new())), &config);

    let (status, _) = send(&app, get("/v1/quizzes")).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, get("/api/quizzes")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_empty_base_path_mounts_at_root() {
    let config = ServerConfig {
        base_path: String::new(),
        ..Default::default()
    };
    let app = create_router(AppState::new(Arc::new(MemoryStore::new())), &config);

    let (status, _) = send(&app, post_json("/users", json!({"name": "Root"}))).await;
    assert_eq!(status, StatusCode::OK);
}

/// Store double that fails or panics on demand.
enum BrokenStore {
    Unavailable,
    Panics,
}

#[async_trait]
impl DocumentStore for BrokenStore {
    async fn add(&self, _collection: &str, _fields: Fields) -> StoreResult<DocumentId> {
        self.fail()
    }

    async fn get(&self, _collection: &str, _id: &str) -> StoreResult<Option<Document>> {
        self.fail()
    }

    async fn query(&self, _collection: &str, _query: Query) -> StoreResult<Vec<Document>> {
        self.fail()
    }
}

impl BrokenStore {
    fn fail<T>(&self) -> StoreResult<T> {
        match self {
            BrokenStore::Unavailable => {
                Err(StoreError::Unavailable("connection refused".to_string()))
            }
            BrokenStore::Panics => panic!("store driver bug"),
        }
    }
}

#[tokio::test]
async fn test_store_unavailable_is_503() {
    let app = app_with_store(Arc::new(BrokenStore::Unavailable));

    let (status, body) = send(&app, get("/api/quizzes")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "SERVICE_UNAVAILABLE");
    assert!(!body.to_string().contains("connection refused"));

    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["store"], "unhealthy");
}

#[tokio::test]
async fn test_panicking_handler_is_captured() {
    let app = app_with_store(Arc::new(BrokenStore::Panics));

    let (status, body) = send(&app, post_json("/api/users", json!({"name": "Bob"}))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "INTERNAL_ERROR");
    assert!(body["requestId"].is_string());

    // The router keeps serving after a panic
    let (status, _) = send(&app, get("/api")).await;
    assert_eq!(status, StatusCode::OK);
}
