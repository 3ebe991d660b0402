//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A plain create DTO, built by the API layer after validation
//! - Response shapes that nest children (serialized with camelCase keys)
//!
//! Client-facing types derive [`ts_rs::TS`] so the browser client imports
//! the same shapes.

pub mod field;
pub mod folder;
pub mod model;
pub mod project;
pub mod route;
pub mod session;
pub mod user;
