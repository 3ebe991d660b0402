//! Handlers for the `/project` resource.

use axum::extract::State;
use axum::Json;
use routebook_core::names::validate_name;
use routebook_db::models::project::{CreateProject, Project};
use routebook_db::repositories::ProjectRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
}

/// POST /api/project/create
///
/// The caller becomes the project's owner.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateProjectRequest>,
) -> AppResult<Json<Project>> {
    let name = validate_name("Project", &input.name)?.to_owned();

    let project = ProjectRepo::create(
        &state.pool,
        &CreateProject {
            name,
            owner_id: auth.user_id,
        },
    )
    .await?;

    tracing::info!(project_id = %project.id, owner_id = %project.owner_id, "Project created");
    Ok(Json(project))
}

/// GET /api/project/list
pub async fn list(auth: AuthUser, State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list_by_owner(&state.pool, auth.user_id).await?;
    Ok(Json(projects))
}
