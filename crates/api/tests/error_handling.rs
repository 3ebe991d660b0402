//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests do NOT need an HTTP server -- they call `IntoResponse`
//! directly on `AppError` values.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use routebook_api::error::AppError;
use routebook_core::error::CoreError;
use routebook_core::vocab::{AuthorizationType, RouteType};
use routebook_db::models::project::CreateProject;
use routebook_db::models::route::CreateRoute;
use routebook_db::models::user::CreateUser;
use routebook_db::repositories::{ProjectRepo, RouteRepo, UserRepo};
use sqlx::PgPool;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::not_found("Route", "unknown"));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Route with id unknown not found");
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("invalid field value".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "invalid field value");
}

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("Project does not exist.".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Project does not exist.");
}

#[tokio::test]
async fn conflict_error_returns_400() {
    let err = AppError::Core(CoreError::Conflict("duplicate name".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(json["error"], "duplicate name");
}

#[tokio::test]
async fn unauthorized_and_forbidden() {
    let (status, json) =
        error_to_response(AppError::Core(CoreError::Unauthorized("no token".into()))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");

    let (status, json) =
        error_to_response(AppError::Core(CoreError::Forbidden("not yours".into()))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["code"], "FORBIDDEN");
}

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::InternalError("secret database credentials leaked".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn core_internal_error_is_sanitized() {
    let err = AppError::Core(CoreError::Internal("connection refused at 10.0.0.5".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!json["error"].as_str().unwrap().contains("10.0.0.5"));
}

#[tokio::test]
async fn row_not_found_returns_404() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn other_database_errors_return_500() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::PoolTimedOut)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
}

// ---------------------------------------------------------------------------
// Real PostgreSQL constraint violations
// ---------------------------------------------------------------------------

fn login_route(project_id: uuid::Uuid) -> CreateRoute {
    CreateRoute {
        project_id,
        folder_id: None,
        name: "Login".to_string(),
        route_type: RouteType::Post,
        authorization_type: AuthorizationType::None,
    }
}

/// A concurrent duplicate that slips past the name pre-check is stopped by
/// `uq_routes_scope_name` and still reported as 400 `CONFLICT`.
#[sqlx::test(migrations = "../../db/migrations")]
async fn unique_violation_on_route_scope_returns_400_conflict(pool: PgPool) {
    let user = UserRepo::create(
        &pool,
        &CreateUser {
            name: None,
            username: "alice".to_string(),
        },
    )
    .await
    .unwrap();
    let project = ProjectRepo::create(
        &pool,
        &CreateProject {
            name: "Shop API".to_string(),
            owner_id: user.id,
        },
    )
    .await
    .unwrap();

    RouteRepo::create_with_models(&pool, &login_route(project.id))
        .await
        .unwrap();
    let err = RouteRepo::create_with_models(&pool, &login_route(project.id))
        .await
        .unwrap_err();

    let (status, json) = error_to_response(AppError::from(err)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "CONFLICT");
    assert!(json["error"].as_str().unwrap().contains("uq_routes_scope_name"));
}

/// A parent that vanished between the check and the insert is a 400
/// `INVALID_REFERENCE`.
#[sqlx::test(migrations = "../../db/migrations")]
async fn foreign_key_violation_returns_400_invalid_reference(pool: PgPool) {
    let err = RouteRepo::create_with_models(&pool, &login_route(uuid::Uuid::new_v4()))
        .await
        .unwrap_err();

    let (status, json) = error_to_response(AppError::from(err)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_REFERENCE");
}
