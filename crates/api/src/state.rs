use std::sync::Arc;

use crate::auth::{build_authenticator, Authenticator};
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: routebook_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Resolves request credentials to a user id (see [`crate::middleware::auth::AuthUser`]).
    pub authenticator: Arc<dyn Authenticator>,
}

impl AppState {
    /// Assemble state, building the authenticator selected by `config.auth.mode`.
    pub fn new(pool: routebook_db::DbPool, config: ServerConfig) -> Self {
        let authenticator = build_authenticator(&config.auth, &config.jwt, pool.clone());
        Self {
            pool,
            config: Arc::new(config),
            authenticator,
        }
    }
}
