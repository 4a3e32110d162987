//! HTTP-level integration tests for the `/categories` resource.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json, signup_and_login};
use sqlx::PgPool;

async fn create_category(pool: &PgPool, token: &str, title: &str) -> serde_json::Value {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/categories",
        Some(token),
        serde_json::json!({"title": title}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_category_crud(pool: PgPool) {
    let token = signup_and_login(&pool, "alice@example.com", "s3cure-pass").await;

    let created = create_category(&pool, &token, "Work").await;
    let id = created["id"].as_str().unwrap();
    assert_eq!(created["title"], "Work");

    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/categories/{id}"),
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/categories/{id}"),
        Some(&token),
        serde_json::json!({"description": "day job"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Work");
    assert_eq!(json["description"], "day job");

    let response = delete(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/categories/{id}"),
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/categories/{id}"),
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Category not found");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_duplicate_title_returns_409_only_for_same_owner(pool: PgPool) {
    let alice_token = signup_and_login(&pool, "alice@example.com", "s3cure-pass").await;
    let bob_token = signup_and_login(&pool, "bob@example.com", "s3cure-pass").await;

    create_category(&pool, &alice_token, "Work").await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/categories",
        Some(&alice_token),
        serde_json::json!({"title": "Work"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(json["error"], "Category with title 'Work' already exists");

    // A different owner can reuse the title.
    create_category(&pool, &bob_token, "Work").await;
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_list_scoped_with_search(pool: PgPool) {
    let alice_token = signup_and_login(&pool, "alice@example.com", "s3cure-pass").await;
    let bob_token = signup_and_login(&pool, "bob@example.com", "s3cure-pass").await;

    create_category(&pool, &alice_token, "Work").await;
    create_category(&pool, &alice_token, "Workout").await;
    create_category(&pool, &alice_token, "Hobby").await;
    create_category(&pool, &bob_token, "Workshop").await;

    let response = get(
        common::build_test_app(pool),
        "/api/v1/categories?search=work",
        Some(&alice_token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Bob's "Workshop" is invisible to Alice.
    let json = body_json(response).await;
    assert_eq!(json["count"], 2);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_foreign_category_returns_403(pool: PgPool) {
    let alice_token = signup_and_login(&pool, "alice@example.com", "s3cure-pass").await;
    let bob_token = signup_and_login(&pool, "bob@example.com", "s3cure-pass").await;

    let created = create_category(&pool, &alice_token, "Private").await;
    let id = created["id"].as_str().unwrap();

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/categories/{id}"),
        Some(&bob_token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
