//! User entity model and DTOs.

use routebook_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;
use ts_rs::TS;

use crate::models::project::ProjectSummary;

/// Full user row from the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub name: Option<String>,
    pub username: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Public user representation returned by `GET /api/user/get`.
#[derive(Debug, Clone, FromRow, Serialize, TS)]
#[ts(export)]
pub struct UserSummary {
    pub id: DbId,
    pub name: Option<String>,
    pub username: String,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            username: user.username,
        }
    }
}

/// The authenticated user together with the projects they own.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct UserProfile {
    #[serde(flatten)]
    pub user: UserSummary,
    pub projects: Vec<ProjectSummary>,
}

/// DTO for creating a new user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: Option<String>,
    pub username: String,
}
