//! Handlers for the `/user` resource.

use axum::extract::State;
use axum::Json;
use routebook_core::error::CoreError;
use routebook_db::models::user::{UserProfile, UserSummary};
use routebook_db::repositories::{ProjectRepo, UserRepo};
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::AppQuery;
use crate::handlers::required_id;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdQuery {
    pub user_id: Option<String>,
}

/// GET /api/user/get?userId=
///
/// Public projection only: `{id, name, username}`.
pub async fn get(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<UserIdQuery>,
) -> AppResult<Json<UserSummary>> {
    let user_id = required_id("User", query.user_id.as_deref())?;
    let user = UserRepo::find_summary_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| CoreError::not_found("User", user_id))?;
    Ok(Json(user))
}

/// GET /api/user/me
pub async fn me(auth: AuthUser, State(state): State<AppState>) -> AppResult<Json<UserProfile>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| CoreError::not_found("User", auth.user_id))?;
    let projects = ProjectRepo::list_summaries_by_owner(&state.pool, auth.user_id).await?;

    Ok(Json(UserProfile {
        user: user.into(),
        projects,
    }))
}
