pub mod field;
pub mod folder;
pub mod health;
pub mod project;
pub mod route;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /field/create                  create field (auth)
///
/// /folder/create                 create folder (auth)
///
/// /project/create                create project (auth)
/// /project/list                  caller's projects (auth)
///
/// /route/create                  create route + models (auth)
/// /route/get?routeId=            full route tree (auth, owner only)
/// /route/getPreview?routeId=     public preview
///
/// /user/get?userId=              public user profile
/// /user/me                       caller profile + projects (auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/field", field::router())
        .nest("/folder", folder::router())
        .nest("/project", project::router())
        .nest("/route", route::router())
        .nest("/user", user::router())
}
