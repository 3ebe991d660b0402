//! Repository for the `fields` table.

use routebook_core::types::DbId;
use sqlx::PgPool;

use crate::models::field::{CreateField, Field};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, field_type, is_optional, is_array, format, model_id, created_at, updated_at";

/// Provides CRUD operations for fields.
pub struct FieldRepo;

impl FieldRepo {
    /// Insert a new field, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateField) -> Result<Field, sqlx::Error> {
        let query = format!(
            "INSERT INTO fields (model_id, name, field_type, is_optional, is_array, format)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Field>(&query)
            .bind(input.model_id)
            .bind(&input.name)
            .bind(input.field_type.as_str())
            .bind(input.is_optional)
            .bind(input.is_array)
            .bind(input.format.as_str())
            .fetch_one(pool)
            .await
    }

    /// Whether the model already has a field with this name.
    pub async fn name_exists(
        pool: &PgPool,
        model_id: DbId,
        name: &str,
    ) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM fields WHERE model_id = $1 AND name = $2)",
        )
        .bind(model_id)
        .bind(name)
        .fetch_one(pool)
        .await?;
        Ok(exists)
    }

    /// List the fields of a model, oldest first.
    pub async fn list_by_model(pool: &PgPool, model_id: DbId) -> Result<Vec<Field>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM fields WHERE model_id = $1 ORDER BY created_at, id"
        );
        sqlx::query_as::<_, Field>(&query)
            .bind(model_id)
            .fetch_all(pool)
            .await
    }

    /// List the fields of every model of a route, oldest first.
    pub async fn list_by_route(pool: &PgPool, route_id: DbId) -> Result<Vec<Field>, sqlx::Error> {
        sqlx::query_as::<_, Field>(
            "SELECT f.id, f.name, f.field_type, f.is_optional, f.is_array, f.format,
                    f.model_id, f.created_at, f.updated_at
             FROM fields f
             JOIN models m ON m.id = f.model_id
             WHERE m.route_id = $1
             ORDER BY f.created_at, f.id",
        )
        .bind(route_id)
        .fetch_all(pool)
        .await
    }
}
