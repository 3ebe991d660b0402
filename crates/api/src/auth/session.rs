//! Session-cookie authentication.
//!
//! The identity provider writes a row to `user_sessions` holding the SHA-256
//! hex digest of the session token and hands the plaintext token to the
//! browser as a cookie. Requests are authenticated by hashing the cookie
//! value and looking up an unexpired session.

use async_trait::async_trait;
use axum::http::header::COOKIE;
use axum::http::HeaderMap;
use routebook_core::error::CoreError;
use routebook_core::types::DbId;
use routebook_db::repositories::SessionRepo;
use routebook_db::DbPool;
use sha2::{Digest, Sha256};

use super::Authenticator;

/// Compute the SHA-256 hex digest of a session token.
pub fn hash_session_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Find the value of cookie `name` across all `Cookie` headers.
pub fn find_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim_matches('"'))
        .filter(|value| !value.is_empty())
}

/// Resolves the user from the session cookie via the `user_sessions` table.
pub struct SessionCookieAuthenticator {
    pool: DbPool,
    cookie_name: String,
}

impl SessionCookieAuthenticator {
    pub fn new(pool: DbPool, cookie_name: impl Into<String>) -> Self {
        Self {
            pool,
            cookie_name: cookie_name.into(),
        }
    }
}

#[async_trait]
impl Authenticator for SessionCookieAuthenticator {
    async fn resolve(&self, headers: &HeaderMap) -> Result<DbId, CoreError> {
        let token = find_cookie(headers, &self.cookie_name)
            .ok_or_else(|| CoreError::Unauthorized("Missing session cookie".into()))?;

        let session = SessionRepo::find_active_by_token_hash(&self.pool, &hash_session_token(token))
            .await
            .map_err(|e| CoreError::Internal(format!("Session lookup failed: {e}")))?
            .ok_or_else(|| CoreError::Unauthorized("Invalid or expired session".into()))?;

        Ok(session.user_id)
    }
}
