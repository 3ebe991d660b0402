//! Authentication primitives.
//!
//! Every protected handler resolves its caller through an [`Authenticator`]
//! held in `AppState`. Two credential sources exist and can be combined:
//!
//! - [`bearer::BearerTokenAuthenticator`] -- `Authorization: Bearer <jwt>`.
//! - [`session::SessionCookieAuthenticator`] -- session cookie backed by `user_sessions`.
//! - [`ChainAuthenticator`] -- tries several in order.

pub mod bearer;
pub mod jwt;
pub mod session;

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::HeaderMap;
use routebook_core::error::CoreError;
use routebook_core::types::DbId;
use routebook_db::DbPool;

use crate::config::{AuthConfig, AuthMode};
use bearer::BearerTokenAuthenticator;
use jwt::JwtConfig;
use session::SessionCookieAuthenticator;

/// Resolves the credentials carried by a request to a user id.
///
/// Implementations return [`CoreError::Unauthorized`] when credentials are
/// missing or invalid, and [`CoreError::Internal`] when they could not be
/// checked at all.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn resolve(&self, headers: &HeaderMap) -> Result<DbId, CoreError>;
}

/// Tries each authenticator in order; the first success wins.
///
/// An `Unauthorized` from one member moves on to the next; any other error
/// stops the chain.
pub struct ChainAuthenticator {
    members: Vec<Arc<dyn Authenticator>>,
}

impl ChainAuthenticator {
    pub fn new(members: Vec<Arc<dyn Authenticator>>) -> Self {
        Self { members }
    }
}

#[async_trait]
impl Authenticator for ChainAuthenticator {
    async fn resolve(&self, headers: &HeaderMap) -> Result<DbId, CoreError> {
        let mut last = CoreError::Unauthorized("Authentication required".into());
        for member in &self.members {
            match member.resolve(headers).await {
                Ok(user_id) => return Ok(user_id),
                Err(err @ CoreError::Unauthorized(_)) => last = err,
                Err(other) => return Err(other),
            }
        }
        Err(last)
    }
}

/// Build the authenticator selected by `AUTH_MODE`.
pub fn build_authenticator(
    auth: &AuthConfig,
    jwt: &JwtConfig,
    pool: DbPool,
) -> Arc<dyn Authenticator> {
    let bearer = || -> Arc<dyn Authenticator> {
        Arc::new(BearerTokenAuthenticator::new(jwt.clone()))
    };
    let session = || -> Arc<dyn Authenticator> {
        Arc::new(SessionCookieAuthenticator::new(
            pool.clone(),
            auth.session_cookie_name.as_str(),
        ))
    };

    match auth.mode {
        AuthMode::Bearer => bearer(),
        AuthMode::Session => session(),
        AuthMode::Any => Arc::new(ChainAuthenticator::new(vec![session(), bearer()])),
    }
}
