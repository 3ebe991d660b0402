use crate::error::CoreError;

/// All database primary keys are PostgreSQL `UUID`s generated by `gen_random_uuid()`.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Parse a client-supplied id for a lookup.
///
/// A string that is not a UUID cannot name any row, so it is reported as
/// [`CoreError::NotFound`] rather than as a validation failure.
pub fn parse_lookup_id(entity: &'static str, raw: &str) -> Result<DbId, CoreError> {
    DbId::parse_str(raw).map_err(|_| CoreError::not_found(entity, raw))
}
