//! Bearer-token authentication (`Authorization: Bearer <jwt>`).

use async_trait::async_trait;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use routebook_core::error::CoreError;
use routebook_core::types::DbId;

use super::jwt::{validate_token, JwtConfig};
use super::Authenticator;

/// Resolves the user from the `sub` claim of a signed access token.
pub struct BearerTokenAuthenticator {
    jwt: JwtConfig,
}

impl BearerTokenAuthenticator {
    pub fn new(jwt: JwtConfig) -> Self {
        Self { jwt }
    }
}

#[async_trait]
impl Authenticator for BearerTokenAuthenticator {
    async fn resolve(&self, headers: &HeaderMap) -> Result<DbId, CoreError> {
        let auth_header = headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| CoreError::Unauthorized("Missing Authorization header".into()))?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            )
        })?;

        let claims = validate_token(token, &self.jwt)
            .map_err(|_| CoreError::Unauthorized("Invalid or expired token".into()))?;

        Ok(claims.sub)
    }
}
