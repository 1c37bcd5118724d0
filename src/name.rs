use crate::error::{DbError, Result};

/// Returns `true` if `name` is non-empty and made only of ASCII letters, digits and `_`.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Validates a database or table name.
///
/// # Errors
/// Returns [DbError::InvalidName] if the name breaks the character policy.
pub fn validate_name(name: &str) -> Result<()> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(DbError::InvalidName(name.to_string()))
    }
}

/// Same as [validate_name] but reports the failure as a column name.
pub fn validate_column_name(name: &str) -> Result<()> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(DbError::InvalidColumnName(name.to_string()))
    }
}
