pub mod field;
pub mod folder;
pub mod project;
pub mod route;
pub mod user;

use routebook_core::error::CoreError;
use routebook_core::types::{parse_lookup_id, DbId};

/// Resolve a required id taken from the query string.
///
/// A missing or blank value is a validation error ("Route id is required.");
/// anything else that fails to parse is reported as not found.
pub(crate) fn required_id(entity: &'static str, raw: Option<&str>) -> Result<DbId, CoreError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| CoreError::Validation(format!("{entity} id is required.")))?;
    parse_lookup_id(entity, raw)
}
