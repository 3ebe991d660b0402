//! Parent resolution and ownership checks used by mutating handlers.
//!
//! A parent that does not exist is a bad request (400): the client sent an id
//! that cannot be built upon. A parent owned by someone else is 403.

use routebook_core::error::CoreError;
use routebook_core::types::DbId;
use routebook_db::models::model::ModelOwner;
use routebook_db::models::project::Project;
use routebook_db::repositories::{ModelRepo, ProjectRepo};
use routebook_db::DbPool;

use crate::error::AppResult;

/// Fail with 403 unless `user_id` owns the resource.
pub fn ensure_owner(owner_id: DbId, user_id: DbId, action: &str) -> Result<(), CoreError> {
    if owner_id == user_id {
        Ok(())
    } else {
        Err(CoreError::Forbidden(format!(
            "You are not authorized to {action}."
        )))
    }
}

/// Load a project the caller is about to build on and check they own it.
pub async fn ensure_project_owner(
    pool: &DbPool,
    project_id: DbId,
    user_id: DbId,
    action: &str,
) -> AppResult<Project> {
    let project = ProjectRepo::find_by_id(pool, project_id)
        .await?
        .ok_or_else(|| CoreError::Validation("Project does not exist.".into()))?;
    ensure_owner(project.owner_id, user_id, action)?;
    Ok(project)
}

/// Resolve a model to its owning project and check the caller owns it.
pub async fn ensure_model_owner(
    pool: &DbPool,
    model_id: DbId,
    user_id: DbId,
    action: &str,
) -> AppResult<ModelOwner> {
    let owner = ModelRepo::find_owner(pool, model_id)
        .await?
        .ok_or_else(|| CoreError::Validation("Model does not exist.".into()))?;
    ensure_owner(owner.owner_id, user_id, action)?;
    Ok(owner)
}
