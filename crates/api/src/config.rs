use std::str::FromStr;

use crate::auth::jwt::JwtConfig;

/// Default name of the cookie carrying the session token.
pub const DEFAULT_SESSION_COOKIE_NAME: &str = "routebook.session-token";

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// Which credentials the API accepts.
    pub auth: AuthConfig,
}

/// Which authenticator(s) resolve incoming requests to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// `Authorization: Bearer <jwt>` only.
    Bearer,
    /// Session cookie only.
    Session,
    /// Session cookie first, then bearer token.
    Any,
}

impl FromStr for AuthMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bearer" => Ok(AuthMode::Bearer),
            "session" => Ok(AuthMode::Session),
            "any" => Ok(AuthMode::Any),
            other => Err(format!(
                "Unknown AUTH_MODE '{other}'. Expected one of: bearer, session, any"
            )),
        }
    }
}

/// Authentication settings.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub mode: AuthMode,
    /// Name of the cookie holding the session token.
    pub session_cookie_name: String,
}

impl AuthConfig {
    /// Load authentication settings from environment variables.
    ///
    /// | Env Var               | Default                    |
    /// |-----------------------|----------------------------|
    /// | `AUTH_MODE`           | `any`                      |
    /// | `SESSION_COOKIE_NAME` | `routebook.session-token`  |
    pub fn from_env() -> Self {
        let mode = std::env::var("AUTH_MODE")
            .unwrap_or_else(|_| "any".into())
            .parse()
            .unwrap_or_else(|e: String| panic!("{e}"));

        let session_cookie_name = std::env::var("SESSION_COOKIE_NAME")
            .unwrap_or_else(|_| DEFAULT_SESSION_COOKIE_NAME.into());

        Self {
            mode,
            session_cookie_name,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:3000".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt: JwtConfig::from_env(),
            auth: AuthConfig::from_env(),
        }
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
