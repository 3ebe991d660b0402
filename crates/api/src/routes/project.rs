use axum::routing::{get, post};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/project`.
///
/// ```text
/// POST   /create        -> create
/// GET    /list          -> list
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create", post(project::create))
        .route("/list", get(project::list))
}
