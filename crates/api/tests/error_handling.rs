//! HTTP-level tests for the error taxonomy: 400 validation, 404 not-found,
//! 409 conflict, and constraint-driven failures.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, post_json, put_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Validation errors (400)
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_with_mismatched_id_returns_400(pool: PgPool) {
    let id = common::seed_user(&pool, "alice").await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/users/{id}"),
        serde_json::json!({
            "id": id + 1,
            "username": "alice",
            "email": "alice@example.com",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_user_with_invalid_email_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/users",
        serde_json::json!({"username": "bob", "email": "not-an-email"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_project_with_empty_name_returns_400(pool: PgPool) {
    let owner = common::seed_user(&pool, "carol").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/projects",
        serde_json::json!({"name": "", "owner_user_id": owner}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_project_with_unknown_owner_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/projects",
        serde_json::json!({"name": "Orphan", "owner_user_id": 999999}),
    )
    .await;

    // Foreign-key violation: the request referenced a missing row.
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_project_with_children_returns_400(pool: PgPool) {
    let owner = common::seed_user(&pool, "dave").await;
    let parent = common::seed_project(&pool, owner, "Parent").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/projects",
        serde_json::json!({
            "name": "Child",
            "owner_user_id": owner,
            "parent_project_id": parent,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/api/v1/projects/{parent}")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Conflicts (409)
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_username_returns_409(pool: PgPool) {
    common::seed_user(&pool, "erin").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/users",
        serde_json::json!({"username": "erin", "email": "erin2@example.com"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

// ---------------------------------------------------------------------------
// Not found (404)
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_nonexistent_patronage_returns_404(pool: PgPool) {
    let owner = common::seed_user(&pool, "frank").await;
    let project = common::seed_project(&pool, owner, "Comic").await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/v1/patronages/999999",
        serde_json::json!({
            "id": 999999,
            "patron_user_id": owner,
            "project_id": project,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_route_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/nonexistent").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Malformed bodies
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_required_field_returns_422(pool: PgPool) {
    let app = common::build_test_app(pool);
    // No email at all: rejected by deserialization before any handler runs.
    let response = post_json(
        app,
        "/api/v1/users",
        serde_json::json!({"username": "grace"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
