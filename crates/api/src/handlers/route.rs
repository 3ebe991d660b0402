//! Handlers for the `/route` resource.

use axum::extract::State;
use axum::Json;
use routebook_core::error::CoreError;
use routebook_core::names::validate_name;
use routebook_core::types::DbId;
use routebook_core::vocab::{AuthorizationType, RouteType};
use routebook_db::models::route::{CreateRoute, RouteDetail, RoutePreview, RouteWithModels};
use routebook_db::repositories::{FolderRepo, RouteRepo};
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::handlers::required_id;
use crate::middleware::auth::AuthUser;
use crate::ownership::ensure_project_owner;
use crate::state::AppState;

/// Request body for `POST /api/route/create`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRouteRequest {
    pub project_id: DbId,
    pub name: String,
    #[serde(rename = "type")]
    pub route_type: RouteType,
    /// `null` or absent means [`AuthorizationType::None`].
    #[serde(default)]
    pub authorization: Option<AuthorizationType>,
    #[serde(default)]
    pub folder_id: Option<DbId>,
}

/// Query string carrying a route id.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteIdQuery {
    pub route_id: Option<String>,
}

/// POST /api/route/create
///
/// Creates the route and its `ARGUMENT`/`RESPONSE` models atomically.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateRouteRequest>,
) -> AppResult<Json<RouteWithModels>> {
    let name = validate_name("Route", &input.name)?.to_owned();

    ensure_project_owner(
        &state.pool,
        input.project_id,
        auth.user_id,
        "add routes to this project",
    )
    .await?;

    if let Some(folder_id) = input.folder_id {
        let in_project = FolderRepo::find_by_id(&state.pool, folder_id)
            .await?
            .is_some_and(|f| f.project_id == input.project_id);
        if !in_project {
            return Err(
                CoreError::Validation("Folder does not exist in this project.".into()).into(),
            );
        }
    }

    if RouteRepo::name_exists_in_scope(&state.pool, input.project_id, input.folder_id, &name)
        .await?
    {
        return Err(CoreError::Conflict(format!(
            "A route named '{name}' already exists here."
        ))
        .into());
    }

    let created = RouteRepo::create_with_models(
        &state.pool,
        &CreateRoute {
            project_id: input.project_id,
            folder_id: input.folder_id,
            name,
            route_type: input.route_type,
            authorization_type: input.authorization.unwrap_or_default(),
        },
    )
    .await?;

    tracing::info!(
        route_id = %created.route.id,
        project_id = %created.route.project_id,
        user_id = %auth.user_id,
        "Route created",
    );
    Ok(Json(created))
}

/// GET /api/route/getPreview?routeId=
///
/// Public lightweight card for sharing a route.
pub async fn get_preview(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<RouteIdQuery>,
) -> AppResult<Json<RoutePreview>> {
    let route_id = required_id("Route", query.route_id.as_deref())?;
    let preview = RouteRepo::find_preview(&state.pool, route_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Route", route_id))?;
    Ok(Json(preview))
}

/// GET /api/route/get?routeId=
///
/// Full route tree for the route's owner.
pub async fn get_detail(
    auth: AuthUser,
    State(state): State<AppState>,
    AppQuery(query): AppQuery<RouteIdQuery>,
) -> AppResult<Json<RouteDetail>> {
    let route_id = required_id("Route", query.route_id.as_deref())?;
    let route = RouteRepo::find_by_id(&state.pool, route_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Route", route_id))?;

    ensure_project_owner(&state.pool, route.project_id, auth.user_id, "view this route").await?;

    let detail = RouteRepo::find_detail(&state.pool, route_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Route", route_id))?;
    Ok(Json(detail))
}
