//! Integration tests for the employee HTTP API
//!
//! Drives the full router (middleware included) against the in-memory store.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use employee_directory::database::{EmployeeStore, InMemoryEmployeeStore};
use employee_directory::models::NewEmployee;
use employee_directory::{router::build_router, AppState, Config};

fn test_app() -> (Router, InMemoryEmployeeStore) {
    let store = InMemoryEmployeeStore::new();
    let state = AppState::new(Config::default(), Arc::new(store.clone()));
    (build_router(state), store)
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

async fn seed(store: &InMemoryEmployeeStore, first: &str, last: &str, email: &str) -> i64 {
    store
        .insert(&NewEmployee::new(first, last, email))
        .await
        .unwrap()
        .id
}

#[tokio::test]
async fn test_create_employee_returns_201_with_assigned_id() {
    let (app, store) = test_app();

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/employees",
            json!({"first_name": "Andrea", "last_name": "Ramirez", "email": "andrea@gmail.com"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["first_name"], "Andrea");
    assert_eq!(body["last_name"], "Ramirez");
    assert_eq!(body["email"], "andrea@gmail.com");
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_create_ignores_client_supplied_id() {
    let (app, _store) = test_app();

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/employees",
            json!({"id": 99, "first_name": "Andrea", "last_name": "Ramirez", "email": "andrea@gmail.com"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_ne!(body["id"], 99);
}

#[tokio::test]
async fn test_create_duplicate_email_returns_409() {
    let (app, store) = test_app();
    seed(&store, "Andrea", "Ramirez", "andrea@gmail.com").await;

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/employees",
            json!({"first_name": "Otra", "last_name": "Persona", "email": "andrea@gmail.com"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "RES_4002");
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_create_invalid_email_returns_400() {
    let (app, store) = test_app();

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/employees",
            json!({"first_name": "Andrea", "last_name": "Ramirez", "email": "not-an-email"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["field"], "email");
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_create_missing_field_returns_400() {
    let (app, store) = test_app();

    let (status, _) = send(
        &app,
        json_request(
            Method::POST,
            "/api/employees",
            json!({"first_name": "Andrea", "email": "andrea@gmail.com"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_create_malformed_json_returns_400() {
    let (app, _store) = test_app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/employees")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VAL_3003");
}

#[tokio::test]
async fn test_list_employees_returns_all() {
    let (app, store) = test_app();
    for i in 0..5 {
        seed(&store, "Nombre", "Apellido", &format!("employee{}@gmail.com", i)).await;
    }

    let (status, body) = send(&app, empty_request(Method::GET, "/api/employees")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_list_employees_empty() {
    let (app, _store) = test_app();

    let (status, body) = send(&app, empty_request(Method::GET, "/api/employees")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_get_employee_by_id() {
    let (app, store) = test_app();
    let id = seed(&store, "Andrea", "Ramirez", "andrea@gmail.com").await;

    let (status, body) = send(
        &app,
        empty_request(Method::GET, &format!("/api/employees/{}", id)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);
    assert_eq!(body["email"], "andrea@gmail.com");
}

#[tokio::test]
async fn test_get_missing_employee_returns_404() {
    let (app, _store) = test_app();

    let (status, body) = send(&app, empty_request(Method::GET, "/api/employees/1")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "RES_4001");
}

#[tokio::test]
async fn test_non_numeric_id_returns_400() {
    let (app, _store) = test_app();

    let (status, _) = send(&app, empty_request(Method::GET, "/api/employees/abc")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_employee_replaces_fields() {
    let (app, store) = test_app();
    let id = seed(&store, "Andrea", "Ramirez", "andrea@gmail.com").await;

    let (status, body) = send(
        &app,
        json_request(
            Method::PUT,
            &format!("/api/employees/{}", id),
            json!({"first_name": "Gabo", "last_name": "Ramirez", "email": "gabriel9528@gmail.com"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);
    assert_eq!(body["first_name"], "Gabo");
    assert_eq!(body["email"], "gabriel9528@gmail.com");

    let stored = store.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.first_name, "Gabo");
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_update_missing_employee_returns_404_without_writing() {
    let (app, store) = test_app();

    let (status, _) = send(
        &app,
        json_request(
            Method::PUT,
            "/api/employees/1",
            json!({"first_name": "Gabo", "last_name": "Ramirez", "email": "gabriel9528@gmail.com"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_update_to_taken_email_returns_409() {
    let (app, store) = test_app();
    seed(&store, "Andrea", "Ramirez", "andrea@gmail.com").await;
    let id = seed(&store, "Gabriel", "Rojas", "gabriel@gmail.com").await;

    let (status, _) = send(
        &app,
        json_request(
            Method::PUT,
            &format!("/api/employees/{}", id),
            json!({"first_name": "Gabriel", "last_name": "Rojas", "email": "andrea@gmail.com"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    let stored = store.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.email, "gabriel@gmail.com");
}

#[tokio::test]
async fn test_delete_employee() {
    let (app, store) = test_app();
    let id = seed(&store, "Andrea", "Ramirez", "andrea@gmail.com").await;

    let (status, body) = send(
        &app,
        empty_request(Method::DELETE, &format!("/api/employees/{}", id)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_delete_missing_employee_still_succeeds() {
    let (app, _store) = test_app();

    let (status, body) = send(&app, empty_request(Method::DELETE, "/api/employees/42")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn test_health_reports_store() {
    let (app, _store) = test_app();

    let (status, body) = send(&app, empty_request(Method::GET, "/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_metrics_unavailable_without_recorder() {
    let (app, _store) = test_app();

    let response = app
        .oneshot(empty_request(Method::GET, "/metrics"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_openapi_document_served() {
    let (app, _store) = test_app();

    let (status, body) = send(&app, empty_request(Method::GET, "/api/docs/openapi.json")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/employees"].is_object());
}

#[tokio::test]
async fn test_responses_carry_request_id_and_security_headers() {
    let (app, _store) = test_app();

    let response = app
        .oneshot(empty_request(Method::GET, "/api/employees"))
        .await
        .unwrap();

    assert!(response.headers().contains_key("x-request-id"));
    assert_eq!(response.headers()["x-content-type-options"], "nosniff");
}

#[tokio::test]
async fn test_error_body_request_id_matches_header() {
    let (app, _store) = test_app();

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/employees/1")
        .header("x-request-id", "abc-123")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.headers()["x-request-id"], "abc-123");

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["request_id"], "abc-123");
}
