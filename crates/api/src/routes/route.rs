//! Route definitions for the `/route` resource (API routes, the domain entity).

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::route;
use crate::state::AppState;

/// Routes mounted at `/route`.
///
/// ```text
/// POST   /create        -> create
/// GET    /get           -> get_detail
/// GET    /getPreview    -> get_preview
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create", post(route::create))
        .route("/get", get(route::get_detail))
        .route("/getPreview", get(route::get_preview))
}
