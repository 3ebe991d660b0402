//! Domain types shared by the database and API crates.

pub mod error;
pub mod names;
pub mod types;
pub mod vocab;
