//! Folder entity model and DTOs.

use routebook_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;
use ts_rs::TS;

/// A folder row from the `folders` table.
#[derive(Debug, Clone, FromRow, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Folder {
    pub id: DbId,
    pub name: String,
    pub project_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// `{id, name}` projection embedded in a route tree.
#[derive(Debug, Clone, FromRow, Serialize, TS)]
#[ts(export)]
pub struct FolderSummary {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a new folder.
#[derive(Debug, Clone)]
pub struct CreateFolder {
    pub project_id: DbId,
    pub name: String,
}
