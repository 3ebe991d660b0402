//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod field_repo;
pub mod folder_repo;
pub mod model_repo;
pub mod project_repo;
pub mod route_repo;
pub mod session_repo;
pub mod user_repo;

pub use field_repo::FieldRepo;
pub use folder_repo::FolderRepo;
pub use model_repo::ModelRepo;
pub use project_repo::ProjectRepo;
pub use route_repo::RouteRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
