//! Name validation shared by projects, folders, routes and fields.

use crate::error::CoreError;

/// Maximum length (in characters) of any user-supplied entity name.
pub const MAX_NAME_LEN: usize = 255;

/// Validate an entity name and return it with surrounding whitespace removed.
///
/// The trimmed name must be non-empty and within [`MAX_NAME_LEN`] characters.
/// Callers store the returned slice, so `" Login"` and `"Login"` are the
/// same name. `entity` is used only to build the error message (e.g. `"Route"`).
pub fn validate_name<'a>(entity: &str, name: &'a str) -> Result<&'a str, CoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CoreError::Validation(format!(
            "{entity} name must not be empty"
        )));
    }
    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "{entity} name too long: {len} chars (max {MAX_NAME_LEN})"
        )));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_regular_name() {
        assert_eq!(validate_name("Route", "Login").unwrap(), "Login");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(validate_name("Route", "  Login\t").unwrap(), "Login");
    }

    #[test]
    fn rejects_empty_and_blank() {
        let err = validate_name("Route", "").unwrap_err();
        assert!(err.to_string().contains("Route name must not be empty"));
        assert!(validate_name("Route", "   ").is_err());
    }

    #[test]
    fn length_is_counted_in_characters() {
        let at_limit = "é".repeat(MAX_NAME_LEN);
        assert!(validate_name("Field", &at_limit).is_ok());

        let over = "x".repeat(MAX_NAME_LEN + 1);
        let err = validate_name("Field", &over).unwrap_err();
        assert!(err.to_string().contains("too long"));
    }
}
