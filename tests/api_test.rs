use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use hangultype_api::{
    models::{
        attempt::{Attempt, AttemptStats, NewAttempt},
        lesson::Lesson,
    },
    repository::{MemoryRepository, Repository, RepositoryError, RepositoryResult},
    routes, AppState,
};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;

fn lesson(id: &str, order_index: i32) -> Lesson {
    Lesson {
        id: id.to_string(),
        title: Some(format!("Lesson {}", id)),
        description: None,
        phase: Some("foundation".to_string()),
        unit: Some(1),
        lesson_number: Some(order_index + 1),
        difficulty: Some(1),
        order_index,
        content_json: Some(json!({
            "targetText": "ㅁㄴㅇㄹ",
            "instructions": "Home row, left hand",
            "focusKeys": ["ㅁ", "ㄴ", "ㅇ", "ㄹ"],
            "reviewKeys": []
        })),
        extra: HashMap::from([("created_at".to_string(), json!("2025-01-01T00:00:00+00:00"))]),
    }
}

fn setup_app() -> (Router, MemoryRepository) {
    let repo = MemoryRepository::with_lessons(vec![
        lesson("1.1.2", 1),
        lesson("1.1.1", 0),
        lesson("1.2.1", 2),
    ]);
    let state = AppState::new(Arc::new(repo.clone()));
    (routes::router(state), repo)
}

struct FailingRepository;

#[async_trait]
impl Repository for FailingRepository {
    async fn fetch_lessons_ordered(&self) -> RepositoryResult<Vec<Lesson>> {
        Err(RepositoryError::Http("connection reset by peer".into()))
    }

    async fn fetch_attempts_by_user(&self, _user_id: &str) -> RepositoryResult<Vec<AttemptStats>> {
        Err(RepositoryError::Http("connection reset by peer".into()))
    }

    async fn insert_attempt(&self, _attempt: NewAttempt) -> RepositoryResult<Attempt> {
        Err(RepositoryError::NotReturned)
    }
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, JsonValue) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: &JsonValue) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn attempt_body(lesson_id: &str, user_id: &str, duration_ms: f64, keystrokes: i64, errors: i64) -> JsonValue {
    let start = 1_717_000_000_000.0;
    json!({
        "lesson_id": lesson_id,
        "user_id": user_id,
        "start_time": start,
        "end_time": start + duration_ms,
        "total_keystrokes": keystrokes,
        "error_count": errors,
    })
}

#[tokio::test]
async fn health_check() {
    let (app, _) = setup_app();
    let (status, body) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["message"], "HangulType API is running");
}

#[tokio::test]
async fn lessons_are_ordered_by_index() {
    let (app, _) = setup_app();
    let (status, body) = send(&app, get("/lessons")).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["1.1.1", "1.1.2", "1.2.1"]);
    assert_eq!(body[0]["content_json"]["instructions"], "Home row, left hand");
    assert_eq!(body[0]["created_at"], "2025-01-01T00:00:00+00:00");
    assert!(body[0].get("description").is_none());
}

#[tokio::test]
async fn attempt_is_scored_and_stored() {
    let (app, repo) = setup_app();
    let (status, body) = send(
        &app,
        post_json("/attempts", &attempt_body("1.1.1", "user-1", 60_000.0, 250, 0)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["wpm"], 50);
    assert_eq!(body["data"]["accuracy"].as_f64(), Some(100.0));
    assert_eq!(body["data"]["duration_seconds"].as_f64(), Some(60.0));
    assert_eq!(body["data"]["verified"], true);
    assert!(body["data"]["id"].is_string());

    let stored = repo.attempts().await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].user_id, "user-1");
}

#[tokio::test]
async fn implausible_speed_is_stored_unverified() {
    let (app, repo) = setup_app();
    let (status, body) = send(
        &app,
        post_json("/attempts", &attempt_body("1.1.1", "user-1", 60_000.0, 1250, 0)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["wpm"], 250);
    assert_eq!(body["data"]["verified"], false);
    assert_eq!(repo.attempts().await.len(), 1);
}

#[tokio::test]
async fn non_positive_duration_is_rejected() {
    let (app, repo) = setup_app();
    for duration in [0.0, -500.0] {
        let (status, body) = send(
            &app,
            post_json("/attempts", &attempt_body("1.1.1", "user-1", duration, 10, 0)),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Invalid duration");
    }
    assert!(repo.attempts().await.is_empty());
}

#[tokio::test]
async fn missing_field_is_a_client_error() {
    let (app, _) = setup_app();
    let body = json!({
        "lesson_id": "1.1.1",
        "user_id": "user-1",
        "start_time": 0,
        "end_time": 1000,
        "total_keystrokes": 10
    });
    let (status, body) = send(&app, post_json("/attempts", &body)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("error_count"));
}

#[tokio::test]
async fn malformed_json_is_a_client_error() {
    let (app, _) = setup_app();
    let req = Request::builder()
        .method("POST")
        .uri("/attempts")
        .header("content-type", "application/json")
        .body(Body::from("{\"lesson_id\": "))
        .unwrap();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn negative_counts_fail_validation() {
    let (app, repo) = setup_app();
    let (status, body) = send(
        &app,
        post_json("/attempts", &attempt_body("1.1.1", "user-1", 60_000.0, -5, 0)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("total_keystrokes"));
    assert!(repo.attempts().await.is_empty());
}

#[tokio::test]
async fn new_user_has_empty_progress() {
    let (app, _) = setup_app();
    let (status, body) = send(&app, get("/user/progress/brand-new")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["completed_lessons"], json!([]));
    assert_eq!(body["average_wpm"].as_f64(), Some(0.0));
    assert_eq!(body["average_accuracy"].as_f64(), Some(0.0));
}

#[tokio::test]
async fn progress_aggregates_recorded_attempts() {
    let (app, _) = setup_app();
    let submissions = [
        attempt_body("1.1.1", "user-1", 60_000.0, 250, 0),
        attempt_body("1.1.1", "user-1", 60_000.0, 150, 15),
        attempt_body("1.1.2", "user-1", 30_000.0, 100, 20),
        attempt_body("1.2.1", "someone-else", 60_000.0, 500, 0),
    ];
    for submission in &submissions {
        let (status, _) = send(&app, post_json("/attempts", submission)).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(&app, get("/user/progress/user-1")).await;
    assert_eq!(status, StatusCode::OK);
    let mut completed: Vec<&str> = body["completed_lessons"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    completed.sort();
    assert_eq!(completed, vec!["1.1.1", "1.1.2"]);
    // wpm 50, 30, 40 and accuracy 100, 90, 80
    assert_eq!(body["average_wpm"].as_f64(), Some(40.0));
    assert_eq!(body["average_accuracy"].as_f64(), Some(90.0));

    let (status, body) = send(&app, get("/user/progress/user-1/lessons")).await;
    assert_eq!(status, StatusCode::OK);
    let lessons = body.as_array().unwrap();
    assert_eq!(lessons.len(), 2);
    assert_eq!(lessons[0]["lesson_id"], "1.1.1");
    assert_eq!(lessons[0]["attempts"], 2);
    assert_eq!(lessons[0]["best_wpm"].as_f64(), Some(50.0));
    assert_eq!(lessons[0]["average_wpm"].as_f64(), Some(40.0));
    assert_eq!(lessons[0]["average_accuracy"].as_f64(), Some(95.0));
    assert_eq!(lessons[1]["lesson_id"], "1.1.2");
    assert_eq!(lessons[1]["attempts"], 1);
}

#[tokio::test]
async fn store_failures_map_to_server_errors() {
    let app = routes::router(AppState::new(Arc::new(FailingRepository)));

    let (status, body) = send(&app, get("/lessons")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], "connection reset by peer");

    let (status, body) = send(&app, get("/user/progress/user-1")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], "connection reset by peer");

    let (status, body) = send(
        &app,
        post_json("/attempts", &attempt_body("1.1.1", "user-1", 60_000.0, 250, 0)),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], "Failed to save attempt");
}

#[tokio::test]
async fn invalid_duration_wins_over_store_failure() {
    let app = routes::router(AppState::new(Arc::new(FailingRepository)));
    let (status, body) = send(
        &app,
        post_json("/attempts", &attempt_body("1.1.1", "user-1", 0.0, 250, 0)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Invalid duration");
}

#[tokio::test]
async fn openapi_document_lists_every_route() {
    let (app, _) = setup_app();
    let (status, body) = send(&app, get("/openapi.json")).await;
    assert_eq!(status, StatusCode::OK);
    for path in [
        "/",
        "/lessons",
        "/attempts",
        "/user/progress/{user_id}",
        "/user/progress/{user_id}/lessons",
    ] {
        assert!(body["paths"].get(path).is_some(), "missing {}", path);
    }
}
