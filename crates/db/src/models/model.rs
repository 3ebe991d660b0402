//! Model entity (argument/response schema container) and nested shapes.

use routebook_core::types::{DbId, Timestamp};
use routebook_core::vocab::ModelType;
use serde::Serialize;
use sqlx::FromRow;
use ts_rs::TS;

use crate::models::field::Field;

/// A model row from the `models` table.
#[derive(Debug, Clone, FromRow, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Model {
    pub id: DbId,
    #[serde(rename = "type")]
    #[sqlx(try_from = "String")]
    pub model_type: ModelType,
    pub route_id: DbId,
    pub created_at: Timestamp,
}

/// A model together with its fields, oldest field first.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct ModelWithFields {
    #[serde(flatten)]
    pub model: Model,
    pub fields: Vec<Field>,
}

/// Ownership chain of a model: which route and project it belongs to and
/// who owns that project.
#[derive(Debug, Clone, FromRow)]
pub struct ModelOwner {
    pub model_id: DbId,
    pub route_id: DbId,
    pub project_id: DbId,
    pub owner_id: DbId,
}
