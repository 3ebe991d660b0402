//! Field entity model and DTOs.

use routebook_core::types::{DbId, Timestamp};
use routebook_core::vocab::{FieldFormat, FieldType};
use serde::Serialize;
use sqlx::FromRow;
use ts_rs::TS;

/// A field row from the `fields` table.
#[derive(Debug, Clone, FromRow, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Field {
    pub id: DbId,
    pub name: String,
    #[serde(rename = "type")]
    #[sqlx(try_from = "String")]
    pub field_type: FieldType,
    #[serde(rename = "optional")]
    pub is_optional: bool,
    #[serde(rename = "array")]
    pub is_array: bool,
    #[sqlx(try_from = "String")]
    pub format: FieldFormat,
    pub model_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new field. Defaults are resolved by the caller.
#[derive(Debug, Clone)]
pub struct CreateField {
    pub model_id: DbId,
    pub name: String,
    pub field_type: FieldType,
    pub is_optional: bool,
    pub is_array: bool,
    pub format: FieldFormat,
}
