//! Authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use routebook_core::types::DbId;

use crate::error::AppError;
use crate::state::AppState;

/// Authenticated caller, resolved by `AppState::authenticator` from either a
/// bearer token or a session cookie (see `AUTH_MODE`).
///
/// Use this as an extractor parameter in any handler that requires authentication:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
///
/// Extraction fails with 401 before the body is read, so an unauthenticated
/// request never reaches validation or persistence.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    /// The caller's user id.
    pub user_id: DbId,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user_id = state.authenticator.resolve(&parts.headers).await?;
        Ok(AuthUser { user_id })
    }
}
