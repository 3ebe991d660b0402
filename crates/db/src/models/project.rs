//! Project entity model and DTOs.

use routebook_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;
use ts_rs::TS;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub owner_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// `{id, name}` projection embedded in previews and user profiles.
#[derive(Debug, Clone, FromRow, Serialize, TS)]
#[ts(export)]
pub struct ProjectSummary {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a new project.
#[derive(Debug, Clone)]
pub struct CreateProject {
    pub name: String,
    pub owner_id: DbId,
}
