//! Handlers for the `/field` resource.

use axum::extract::State;
use axum::Json;
use routebook_core::error::CoreError;
use routebook_core::names::validate_name;
use routebook_core::types::DbId;
use routebook_core::vocab::{FieldFormat, FieldType};
use routebook_db::models::field::CreateField;
use routebook_db::models::model::ModelWithFields;
use routebook_db::repositories::{FieldRepo, ModelRepo};
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::ownership::ensure_model_owner;
use crate::state::AppState;

/// Request body for `POST /api/field/create`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFieldRequest {
    pub model_id: DbId,
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    // Absent and `null` both fall back to the defaults below.
    #[serde(default)]
    pub optional: Option<bool>,
    #[serde(default)]
    pub array: Option<bool>,
    #[serde(default)]
    pub format: Option<FieldFormat>,
}

/// POST /api/field/create
///
/// Adds a field to a model and returns the model with all of its fields.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateFieldRequest>,
) -> AppResult<Json<ModelWithFields>> {
    let name = validate_name("Field", &input.name)?.to_owned();

    let owner = ensure_model_owner(
        &state.pool,
        input.model_id,
        auth.user_id,
        "add fields to this model",
    )
    .await?;

    if FieldRepo::name_exists(&state.pool, input.model_id, &name).await? {
        return Err(CoreError::Conflict(format!(
            "A field named '{name}' already exists on this model."
        ))
        .into());
    }

    let field = FieldRepo::create(
        &state.pool,
        &CreateField {
            model_id: input.model_id,
            name,
            field_type: input.field_type,
            is_optional: input.optional.unwrap_or(false),
            is_array: input.array.unwrap_or(false),
            format: input.format.unwrap_or_default(),
        },
    )
    .await?;

    tracing::info!(
        field_id = %field.id,
        model_id = %owner.model_id,
        route_id = %owner.route_id,
        user_id = %auth.user_id,
        "Field created",
    );

    let model = ModelRepo::find_with_fields(&state.pool, input.model_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Model", input.model_id))?;
    Ok(Json(model))
}
