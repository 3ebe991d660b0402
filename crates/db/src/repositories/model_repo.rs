//! Repository for the `models` table.

use routebook_core::types::DbId;
use sqlx::PgPool;

use crate::models::model::{Model, ModelOwner, ModelWithFields};
use crate::repositories::FieldRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, model_type, route_id, created_at";

/// Argument model first, response model second.
const ORDER_BY_TYPE: &str = "CASE model_type WHEN 'ARGUMENT' THEN 0 ELSE 1 END";

/// Provides lookups for models. Models are only ever created together with
/// their route, see [`crate::repositories::RouteRepo::create_with_models`].
pub struct ModelRepo;

impl ModelRepo {
    /// Find a model by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Model>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM models WHERE id = $1");
        sqlx::query_as::<_, Model>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Resolve the route, project and project owner a model belongs to.
    pub async fn find_owner(pool: &PgPool, id: DbId) -> Result<Option<ModelOwner>, sqlx::Error> {
        sqlx::query_as::<_, ModelOwner>(
            "SELECT m.id AS model_id, m.route_id, r.project_id, p.owner_id
             FROM models m
             JOIN routes r ON r.id = m.route_id
             JOIN projects p ON p.id = r.project_id
             WHERE m.id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// List the models of a route, argument model first.
    pub async fn list_by_route(pool: &PgPool, route_id: DbId) -> Result<Vec<Model>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM models WHERE route_id = $1 ORDER BY {ORDER_BY_TYPE}");
        sqlx::query_as::<_, Model>(&query)
            .bind(route_id)
            .fetch_all(pool)
            .await
    }

    /// Find a model together with all of its fields.
    pub async fn find_with_fields(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ModelWithFields>, sqlx::Error> {
        let Some(model) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let fields = FieldRepo::list_by_model(pool, id).await?;
        Ok(Some(ModelWithFields { model, fields }))
    }
}
