use axum::routing::post;
use axum::Router;

use crate::handlers::field;
use crate::state::AppState;

/// Routes mounted at `/field`.
///
/// ```text
/// POST   /create        -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/create", post(field::create))
}
