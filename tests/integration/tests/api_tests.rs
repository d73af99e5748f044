//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_DSN
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_error, assert_json, assert_text, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_healthcheck() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/healthcheck").await.expect("Request failed");
    let body: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "I am alive!");
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
}

// ============================================================================
// User Lifecycle Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut payload = UserPayload::unique();
    payload.middle_name = Some("Q".to_string());

    let id = server.create_user(&payload).await.unwrap();

    let response = server.get(&format!("/users/{id}")).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(user.id, id);
    assert_eq!(user.username, payload.username);
    assert_eq!(user.first_name, payload.first_name);
    assert_eq!(user.middle_name, payload.middle_name);
    assert_eq!(user.last_name, payload.last_name);
    assert_eq!(user.email, payload.email);
    assert_eq!(user.gender, "F");
    assert_eq!(user.age, payload.age);
}

#[tokio::test]
async fn test_create_duplicate_username() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let payload = UserPayload::unique();
    server.create_user(&payload).await.unwrap();

    let mut again = payload.clone();
    again.email = "other@example.com".to_string();
    again.age = 77;
    let response = server.post("/users", &again).await.unwrap();
    assert_error(response, StatusCode::CONFLICT, "USERNAME_ALREADY_TAKEN")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_invalid_input() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let mut payload = UserPayload::unique();
    payload.email = "test@example.travel".to_string();
    let response = server.post("/users", &payload).await.unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "INVALID_EMAIL")
        .await
        .unwrap();

    let mut payload = UserPayload::unique();
    payload.gender = "Q".to_string();
    let response = server.post("/users", &payload).await.unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "INVALID_GENDER")
        .await
        .unwrap();

    let mut payload = UserPayload::unique();
    payload.age = 151;
    let response = server.post("/users", &payload).await.unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "INVALID_AGE")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let id = server.create_user(&UserPayload::unique()).await.unwrap();

    let mut changed = UserPayload::unique();
    changed.gender = "m".to_string();
    changed.age = 45;
    let response = server.put(&format!("/users/{id}"), &changed).await.unwrap();
    let body: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "success");

    let response = server.get(&format!("/users/{id}")).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(user.username, changed.username);
    assert_eq!(user.gender, "M");
    assert_eq!(user.age, 45);
}

#[tokio::test]
async fn test_update_to_taken_username() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let first = UserPayload::unique();
    server.create_user(&first).await.unwrap();
    let second_id = server.create_user(&UserPayload::unique()).await.unwrap();

    let response = server
        .put(&format!("/users/{second_id}"), &first)
        .await
        .unwrap();
    assert_error(response, StatusCode::CONFLICT, "USERNAME_ALREADY_TAKEN")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let payload = UserPayload::unique();
    let id = server.create_user(&payload).await.unwrap();
    let path = format!("/users/{id}");

    let response = server.delete(&path).await.unwrap();
    let body: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message, "success");

    let response = server.get(&path).await.unwrap();
    assert_error(response, StatusCode::GONE, "USER_IS_GONE")
        .await
        .unwrap();

    let response = server.put(&path, &payload).await.unwrap();
    assert_error(response, StatusCode::GONE, "USER_IS_GONE")
        .await
        .unwrap();

    let response = server.delete(&path).await.unwrap();
    assert_error(response, StatusCode::CONFLICT, "USER_HAS_BEEN_DELETED_ONCE")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_concurrent_deletes() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let id = server.create_user(&UserPayload::unique()).await.unwrap();
    let path = format!("/users/{id}");

    let (a, b) = tokio::join!(server.delete(&path), server.delete(&path));
    let mut statuses = [a.unwrap().status(), b.unwrap().status()];
    statuses.sort();
    assert_eq!(statuses, [StatusCode::OK, StatusCode::CONFLICT]);
}

#[tokio::test]
async fn test_unknown_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let path = format!("/users/{}", i64::MAX);

    let response = server.get(&path).await.unwrap();
    assert_error(response, StatusCode::NOT_FOUND, "USER_DOES_NOT_EXIST")
        .await
        .unwrap();

    let response = server.put(&path, &UserPayload::unique()).await.unwrap();
    assert_error(response, StatusCode::NOT_FOUND, "USER_DOES_NOT_EXIST")
        .await
        .unwrap();

    let response = server.delete(&path).await.unwrap();
    assert_error(response, StatusCode::NOT_FOUND, "USER_DOES_NOT_EXIST")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_invalid_path_parameter() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/users/not-a-number").await.unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "INVALID_PATH_PARAMETER")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_returns_plain_text_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.post("/users", &UserPayload::unique()).await.unwrap();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body = assert_text(response, StatusCode::CREATED).await.unwrap();

    assert!(content_type.starts_with("text/plain"));
    assert!(body.parse::<i64>().is_ok());
}
