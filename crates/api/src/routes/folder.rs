use axum::routing::post;
use axum::Router;

use crate::handlers::folder;
use crate::state::AppState;

/// Routes mounted at `/folder`.
///
/// ```text
/// POST   /create        -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/create", post(folder::create))
}
