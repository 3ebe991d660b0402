//! Request extractors shared by protected handlers.
//!
//! - [`auth::AuthUser`] -- Resolves the caller through the configured authenticator.

pub mod auth;
