//! HTTP-level integration tests for the entity API endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// User CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_user_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/users",
        serde_json::json!({"username": "alice", "email": "alice@example.com"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["username"], "alice");
    assert_eq!(json["email"], "alice@example.com");
    assert!(json["id"].is_number());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_user_by_id(pool: PgPool) {
    let id = common::seed_user(&pool, "bob").await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/users/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["username"], "bob");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_user_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/users/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_user(pool: PgPool) {
    let id = common::seed_user(&pool, "carol").await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/users/{id}"),
        serde_json::json!({
            "id": id,
            "username": "carol-renamed",
            "email": "carol-renamed@example.com",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["username"], "carol-renamed");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_user_returns_204(pool: PgPool) {
    let id = common::seed_user(&pool, "dave").await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/users/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Subsequent GET should 404.
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/users/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_nonexistent_user_is_noop(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/api/v1/users/999999").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_users(pool: PgPool) {
    common::seed_user(&pool, "erin").await;
    common::seed_user(&pool, "frank").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/users").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Project CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_project_returns_201(pool: PgPool) {
    let owner = common::seed_user(&pool, "grace").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/projects",
        serde_json::json!({
            "name": "Synth Album",
            "description": "A modular synth record",
            "owner_user_id": owner,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Synth Album");
    assert_eq!(json["owner_user_id"], owner);
    assert!(json["collection_id"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_child_project(pool: PgPool) {
    let owner = common::seed_user(&pool, "heidi").await;
    let parent = common::seed_project(&pool, owner, "Season 1").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/projects",
        serde_json::json!({
            "name": "Episode 1",
            "owner_user_id": owner,
            "parent_project_id": parent,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["parent_project_id"], parent);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_project(pool: PgPool) {
    let owner = common::seed_user(&pool, "ivan").await;
    let id = common::seed_project(&pool, owner, "Original").await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/projects/{id}"),
        serde_json::json!({
            "id": id,
            "name": "Updated",
            "owner_user_id": owner,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Updated");
}

// ---------------------------------------------------------------------------
// Patronage + payment chain
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_patronage_and_payment_flow(pool: PgPool) {
    let owner = common::seed_user(&pool, "judy").await;
    let patron = common::seed_user(&pool, "oscar").await;
    let project = common::seed_project(&pool, owner, "Zine").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/patronages",
        serde_json::json!({"patron_user_id": patron, "project_id": project}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let patronage = body_json(response).await;
    let patronage_id = patronage["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/patronage-payments",
        serde_json::json!({
            "patronage_id": patronage_id,
            "amount": "25.00",
            "paid_at": "2026-08-01T00:00:00Z",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let payment = body_json(response).await;
    assert_eq!(payment["amount"], "25.00");
    let payment_id = payment["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/patronage-payments/{payment_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["patronage_id"], patronage_id);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/patronages").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}
