//! HTTP-level integration tests for field creation.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_project, create_user, post_json_auth, token_for};
use serde_json::json;
use sqlx::PgPool;

/// Create a project + route for `username` and return (token, argument model id).
async fn setup_route(pool: &PgPool, username: &str) -> (String, serde_json::Value) {
    let user = create_user(pool, username).await;
    let project = create_project(pool, user.id, "Shop API").await;
    let token = token_for(user.id);

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/route/create",
        json!({ "projectId": project.id, "name": "Login", "type": "POST" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let route = body_json(response).await;
    (token, route["models"][0]["id"].clone())
}

async fn count_fields(pool: &PgPool) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM fields")
        .fetch_one(pool)
        .await
        .unwrap();
    count
}

/// Omitted flags default to `optional=false, array=false, format=NONE`, and
/// the response is the whole model.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_field_defaults(pool: PgPool) {
    let (token, model_id) = setup_route(&pool, "alice").await;

    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/field/create",
        json!({ "modelId": model_id, "name": "email", "type": "STRING" }),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], model_id);
    assert_eq!(json["type"], "ARGUMENT");

    let fields = json["fields"].as_array().unwrap();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0]["name"], "email");
    assert_eq!(fields[0]["type"], "STRING");
    assert_eq!(fields[0]["optional"], false);
    assert_eq!(fields[0]["array"], false);
    assert_eq!(fields[0]["format"], "NONE");
}

/// Every field of the model is returned, oldest first.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_field_returns_all_fields(pool: PgPool) {
    let (token, model_id) = setup_route(&pool, "alice").await;

    post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/field/create",
        json!({ "modelId": model_id, "name": "email", "type": "STRING", "format": "EMAIL" }),
        &token,
    )
    .await;

    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/field/create",
        json!({
            "modelId": model_id,
            "name": "tags",
            "type": "STRING",
            "optional": true,
            "array": true,
        }),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let fields = json["fields"].as_array().unwrap();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0]["format"], "EMAIL");
    assert_eq!(fields[1]["name"], "tags");
    assert_eq!(fields[1]["optional"], true);
    assert_eq!(fields[1]["array"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_field_duplicate_name(pool: PgPool) {
    let (token, model_id) = setup_route(&pool, "alice").await;
    let body = json!({ "modelId": model_id, "name": "email", "type": "STRING" });

    post_json_auth(common::build_test_app(pool.clone()), "/api/field/create", body.clone(), &token)
        .await;
    let response =
        post_json_auth(common::build_test_app(pool.clone()), "/api/field/create", body, &token)
            .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "CONFLICT");
    assert_eq!(count_fields(&pool).await, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_field_missing_model(pool: PgPool) {
    let user = create_user(&pool, "alice").await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app,
        "/api/field/create",
        json!({ "modelId": uuid::Uuid::new_v4(), "name": "email", "type": "STRING" }),
        &token_for(user.id),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Model does not exist.");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_field_non_owner_forbidden(pool: PgPool) {
    let (_token, model_id) = setup_route(&pool, "alice").await;
    let stranger = create_user(&pool, "mallory").await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/field/create",
        json!({ "modelId": model_id, "name": "email", "type": "STRING" }),
        &token_for(stranger.id),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(count_fields(&pool).await, 0);
}

/// Explicit `null` flags fall back to the same defaults as omitted ones.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_field_null_flags_use_defaults(pool: PgPool) {
    let (token, model_id) = setup_route(&pool, "alice").await;

    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/field/create",
        json!({
            "modelId": model_id,
            "name": "email",
            "type": "STRING",
            "optional": null,
            "array": null,
            "format": null,
        }),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let field = &json["fields"][0];
    assert_eq!(field["optional"], false);
    assert_eq!(field["array"], false);
    assert_eq!(field["format"], "NONE");
}

/// Names are stored trimmed, so padding does not dodge the uniqueness check.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_field_name_is_trimmed(pool: PgPool) {
    let (token, model_id) = setup_route(&pool, "alice").await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/field/create",
        json!({ "modelId": model_id, "name": "  email ", "type": "STRING" }),
        &token,
    )
    .await;
    assert_eq!(body_json(response).await["fields"][0]["name"], "email");

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/field/create",
        json!({ "modelId": model_id, "name": "email", "type": "STRING" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "CONFLICT");
    assert_eq!(count_fields(&pool).await, 1);
}
