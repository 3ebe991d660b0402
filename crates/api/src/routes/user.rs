use axum::routing::get;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/user`.
///
/// ```text
/// GET    /get           -> get
/// GET    /me            -> me
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/get", get(user::get))
        .route("/me", get(user::me))
}
