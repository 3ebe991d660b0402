//! Route entity model, DTOs and nested response shapes.

use routebook_core::types::{DbId, Timestamp};
use routebook_core::vocab::{AuthorizationType, RouteType};
use serde::Serialize;
use sqlx::FromRow;
use ts_rs::TS;

use crate::models::folder::FolderSummary;
use crate::models::model::{Model, ModelWithFields};
use crate::models::project::ProjectSummary;

/// A route row from the `routes` table.
#[derive(Debug, Clone, FromRow, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Route {
    pub id: DbId,
    pub name: String,
    #[serde(rename = "type")]
    #[sqlx(try_from = "String")]
    pub route_type: RouteType,
    #[serde(rename = "authorization")]
    #[sqlx(try_from = "String")]
    pub authorization_type: AuthorizationType,
    pub project_id: DbId,
    pub folder_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A freshly created route with its argument and response models.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct RouteWithModels {
    #[serde(flatten)]
    pub route: Route,
    pub models: Vec<Model>,
}

/// Lightweight route card: `{id, name, type, project: {id, name}}`.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct RoutePreview {
    pub id: DbId,
    pub name: String,
    #[serde(rename = "type")]
    pub route_type: RouteType,
    pub project: ProjectSummary,
}

/// Flat join row backing [`RoutePreview`].
#[derive(Debug, Clone, FromRow)]
pub struct RoutePreviewRow {
    pub id: DbId,
    pub name: String,
    #[sqlx(try_from = "String")]
    pub route_type: RouteType,
    pub project_id: DbId,
    pub project_name: String,
}

impl From<RoutePreviewRow> for RoutePreview {
    fn from(row: RoutePreviewRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            route_type: row.route_type,
            project: ProjectSummary {
                id: row.project_id,
                name: row.project_name,
            },
        }
    }
}

/// The full route tree rendered by the client: route, folder, both models
/// (argument first) and every field.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct RouteDetail {
    #[serde(flatten)]
    pub route: Route,
    pub folder: Option<FolderSummary>,
    pub models: Vec<ModelWithFields>,
}

/// DTO for creating a new route. Its two models are created alongside it.
#[derive(Debug, Clone)]
pub struct CreateRoute {
    pub project_id: DbId,
    pub folder_id: Option<DbId>,
    pub name: String,
    pub route_type: RouteType,
    pub authorization_type: AuthorizationType,
}
