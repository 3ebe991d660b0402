//! Repository for the `routes` table.
//!
//! A route never exists without its two models: [`RouteRepo::create_with_models`]
//! writes the route, its `ARGUMENT` model and its `RESPONSE` model in one
//! transaction.

use routebook_core::types::DbId;
use routebook_core::vocab::ModelType;
use sqlx::PgPool;

use crate::models::model::{Model, ModelWithFields};
use crate::models::route::{
    CreateRoute, Route, RouteDetail, RoutePreview, RoutePreviewRow, RouteWithModels,
};
use crate::repositories::{FieldRepo, FolderRepo, ModelRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, route_type, authorization_type, project_id, folder_id, created_at, updated_at";

/// Column list of the `models` table, used for inserts inside the route transaction.
const MODEL_COLUMNS: &str = "id, model_type, route_id, created_at";

/// Provides create and read operations for routes.
pub struct RouteRepo;

impl RouteRepo {
    /// Whether a route with this name already exists in the `(project, folder)`
    /// scope. `folder_id = None` is the project-root scope.
    pub async fn name_exists_in_scope(
        pool: &PgPool,
        project_id: DbId,
        folder_id: Option<DbId>,
        name: &str,
    ) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(
                SELECT 1 FROM routes
                WHERE project_id = $1
                  AND folder_id IS NOT DISTINCT FROM $2
                  AND name = $3
             )",
        )
        .bind(project_id)
        .bind(folder_id)
        .bind(name)
        .fetch_one(pool)
        .await?;
        Ok(exists)
    }

    /// Insert a route together with its `ARGUMENT` and `RESPONSE` models.
    ///
    /// All three rows are written in one transaction; on any error the
    /// transaction is rolled back when dropped and nothing is persisted.
    pub async fn create_with_models(
        pool: &PgPool,
        input: &CreateRoute,
    ) -> Result<RouteWithModels, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO routes (project_id, folder_id, name, route_type, authorization_type)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let route = sqlx::query_as::<_, Route>(&query)
            .bind(input.project_id)
            .bind(input.folder_id)
            .bind(&input.name)
            .bind(input.route_type.as_str())
            .bind(input.authorization_type.as_str())
            .fetch_one(&mut *tx)
            .await?;

        let model_query = format!(
            "INSERT INTO models (route_id, model_type)
             VALUES ($1, $2)
             RETURNING {MODEL_COLUMNS}"
        );
        let mut models = Vec::with_capacity(ModelType::ALL.len());
        for model_type in ModelType::ALL {
            let model = sqlx::query_as::<_, Model>(&model_query)
                .bind(route.id)
                .bind(model_type.as_str())
                .fetch_one(&mut *tx)
                .await?;
            models.push(model);
        }

        tx.commit().await?;
        Ok(RouteWithModels { route, models })
    }

    /// Find a route by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Route>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM routes WHERE id = $1");
        sqlx::query_as::<_, Route>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the `{id, name, type, project: {id, name}}` preview of a route.
    pub async fn find_preview(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<RoutePreview>, sqlx::Error> {
        let row = sqlx::query_as::<_, RoutePreviewRow>(
            "SELECT r.id, r.name, r.route_type, p.id AS project_id, p.name AS project_name
             FROM routes r
             JOIN projects p ON p.id = r.project_id
             WHERE r.id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row.map(RoutePreview::from))
    }

    /// Load the full tree of a route: folder, models (argument first) and fields.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<RouteDetail>, sqlx::Error> {
        let Some(route) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let folder = match route.folder_id {
            Some(folder_id) => FolderRepo::find_summary(pool, folder_id).await?,
            None => None,
        };

        let fields = FieldRepo::list_by_route(pool, id).await?;
        let models = ModelRepo::list_by_route(pool, id)
            .await?
            .into_iter()
            .map(|model| {
                let own = fields
                    .iter()
                    .filter(|f| f.model_id == model.id)
                    .cloned()
                    .collect();
                ModelWithFields { model, fields: own }
            })
            .collect();

        Ok(Some(RouteDetail {
            route,
            folder,
            models,
        }))
    }
}
