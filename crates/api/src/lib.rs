//! Routebook API server library.
//!
//! Exposes the core building blocks (config, state, authentication, error
//! handling, routes) so integration tests and the binary entrypoint can both
//! access them.

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod ownership;
pub mod router;
pub mod routes;
pub mod state;
