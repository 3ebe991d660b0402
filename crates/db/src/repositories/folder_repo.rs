//! Repository for the `folders` table.

use routebook_core::types::DbId;
use sqlx::PgPool;

use crate::models::folder::{CreateFolder, Folder, FolderSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, project_id, created_at, updated_at";

/// Provides CRUD operations for folders.
pub struct FolderRepo;

impl FolderRepo {
    /// Insert a new folder, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateFolder) -> Result<Folder, sqlx::Error> {
        let query = format!(
            "INSERT INTO folders (project_id, name)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Folder>(&query)
            .bind(input.project_id)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a folder by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Folder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM folders WHERE id = $1");
        sqlx::query_as::<_, Folder>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// `{id, name}` of a folder, if it exists.
    pub async fn find_summary(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<FolderSummary>, sqlx::Error> {
        sqlx::query_as::<_, FolderSummary>("SELECT id, name FROM folders WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether the project already has a folder with this name.
    pub async fn name_exists(
        pool: &PgPool,
        project_id: DbId,
        name: &str,
    ) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM folders WHERE project_id = $1 AND name = $2)",
        )
        .bind(project_id)
        .bind(name)
        .fetch_one(pool)
        .await?;
        Ok(exists)
    }
}
