//! HTTP-level integration tests for the `/notes` resource.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, delete_json, get, post_json, put_json, signup_and_login};
use sqlx::PgPool;

async fn create_task(pool: &PgPool, token: &str, title: &str) -> String {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/tasks",
        Some(token),
        serde_json::json!({"title": title}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_str().unwrap().to_string()
}

async fn create_note(pool: &PgPool, token: &str, task_id: &str, title: &str) -> serde_json::Value {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/notes",
        Some(token),
        serde_json::json!({"title": title, "task_id": task_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_note_crud(pool: PgPool) {
    let token = signup_and_login(&pool, "alice@example.com", "s3cure-pass").await;
    let task_id = create_task(&pool, &token, "Host task").await;

    let created = create_note(&pool, &token, &task_id, "Reminder").await;
    let id = created["id"].as_str().unwrap();
    assert_eq!(created["task_id"].as_str().unwrap(), task_id);

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/notes/{id}"),
        Some(&token),
        serde_json::json!({"description": "details"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Reminder");
    assert_eq!(json["description"], "details");

    let response = delete(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/notes/{id}"),
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["message"],
        "Note deleted successfully"
    );

    let response = get(common::build_test_app(pool), "/api/v1/notes", Some(&token)).await;
    assert_eq!(body_json(response).await["count"], 0);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_create_note_on_unknown_task_returns_404(pool: PgPool) {
    let token = signup_and_login(&pool, "alice@example.com", "s3cure-pass").await;

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/notes",
        Some(&token),
        serde_json::json!({"title": "Orphan", "task_id": uuid::Uuid::new_v4()}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Task not found");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_create_note_on_foreign_task_returns_403(pool: PgPool) {
    let alice_token = signup_and_login(&pool, "alice@example.com", "s3cure-pass").await;
    let bob_token = signup_and_login(&pool, "bob@example.com", "s3cure-pass").await;

    let bobs_task = create_task(&pool, &bob_token, "Bob's task").await;

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/notes",
        Some(&alice_token),
        serde_json::json!({"title": "Sneaky", "task_id": bobs_task}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_list_notes_by_task(pool: PgPool) {
    let token = signup_and_login(&pool, "alice@example.com", "s3cure-pass").await;

    let t1 = create_task(&pool, &token, "T1").await;
    let t2 = create_task(&pool, &token, "T2").await;
    create_note(&pool, &token, &t1, "a").await;
    create_note(&pool, &token, &t1, "b").await;
    create_note(&pool, &token, &t2, "c").await;

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/notes/task/{t1}"),
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["count"], 2);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_bulk_delete_notes(pool: PgPool) {
    let token = signup_and_login(&pool, "alice@example.com", "s3cure-pass").await;

    let task_id = create_task(&pool, &token, "Host").await;
    let a = create_note(&pool, &token, &task_id, "a").await;
    let b = create_note(&pool, &token, &task_id, "b").await;

    let response = delete_json(
        common::build_test_app(pool.clone()),
        "/api/v1/notes",
        Some(&token),
        serde_json::json!({"ids": [a["id"], b["id"]]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["message"],
        "2 notes deleted successfully"
    );

    // Unknown id set: 404.
    let response = delete_json(
        common::build_test_app(pool),
        "/api/v1/notes",
        Some(&token),
        serde_json::json!({"ids": [uuid::Uuid::new_v4()]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "No notes found");
}
