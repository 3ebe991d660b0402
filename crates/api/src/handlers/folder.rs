//! Handlers for the `/folder` resource.

use axum::extract::State;
use axum::Json;
use routebook_core::error::CoreError;
use routebook_core::names::validate_name;
use routebook_core::types::DbId;
use routebook_db::models::folder::{CreateFolder, Folder};
use routebook_db::repositories::FolderRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::ownership::ensure_project_owner;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFolderRequest {
    pub project_id: DbId,
    pub name: String,
}

/// POST /api/folder/create
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateFolderRequest>,
) -> AppResult<Json<Folder>> {
    let name = validate_name("Folder", &input.name)?.to_owned();

    ensure_project_owner(
        &state.pool,
        input.project_id,
        auth.user_id,
        "add folders to this project",
    )
    .await?;

    if FolderRepo::name_exists(&state.pool, input.project_id, &name).await? {
        return Err(CoreError::Conflict(format!(
            "A folder named '{name}' already exists in this project."
        ))
        .into());
    }

    let folder = FolderRepo::create(
        &state.pool,
        &CreateFolder {
            project_id: input.project_id,
            name,
        },
    )
    .await?;

    tracing::info!(folder_id = %folder.id, project_id = %folder.project_id, "Folder created");
    Ok(Json(folder))
}
