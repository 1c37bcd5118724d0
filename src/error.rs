//! Error types for the engine.
//!
//! The `Display` text of every variant is the one-line message shown to the
//! user, so the session layer simply prints `err.to_string()`.

use thiserror::Error;

/// Structural syntax violations found while parsing a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Create table syntax invalid")]
    CreateTable,

    #[error("Select syntax invalid")]
    Select,

    #[error("Insert syntax invalid")]
    Insert,

    #[error("Number of columns and values does not match")]
    ColumnCountMismatch,
}

/// Engine error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DbError {
    /// A database or table name contains something other than letters, digits or `_`.
    #[error("Name {0} is invalid")]
    InvalidName(String),

    /// Same rule as [DbError::InvalidName], applied to a column name.
    #[error("Column name {0} is invalid")]
    InvalidColumnName(String),

    #[error("Database {0} already exists")]
    DuplicateDatabase(String),

    #[error("Table {0} already exists")]
    DuplicateTable(String),

    /// A table definition without any column.
    #[error("No columns defined")]
    NoColumns,

    /// A column clause without a trailing type token.
    #[error("Column {0} has no data type")]
    MissingDataType(String),

    #[error("Type {0} is not supported")]
    UnsupportedType(String),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Unknown command")]
    UnknownCommand,

    #[error("No active database")]
    NoActiveDatabase,

    #[error("Unknown database {0}")]
    UnknownDatabase(String),

    #[error("Table {0} does not exist")]
    TableNotFound(String),
}

impl DbError {
    /// Returns `true` for both the identifier and the column-name flavour.
    pub fn is_invalid_name(&self) -> bool {
        matches!(self, Self::InvalidName(_) | Self::InvalidColumnName(_))
    }

    /// Returns `true` when a table definition has no columns or a column misses its type.
    pub fn is_invalid_table_definition(&self) -> bool {
        matches!(self, Self::NoColumns | Self::MissingDataType(_))
    }
}

/// Result type for the engine
pub type Result<T> = std::result::Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            DbError::InvalidName("test one".into()).to_string(),
            "Name test one is invalid"
        );
        assert_eq!(
            DbError::InvalidColumnName("bad name".into()).to_string(),
            "Column name bad name is invalid"
        );
        assert_eq!(
            DbError::MissingDataType("id".into()).to_string(),
            "Column id has no data type"
        );
        assert_eq!(
            DbError::from(ParseError::ColumnCountMismatch).to_string(),
            "Number of columns and values does not match"
        );
    }

    #[test]
    fn test_error_kinds() {
        assert!(DbError::InvalidColumnName("a-b".into()).is_invalid_name());
        assert!(DbError::NoColumns.is_invalid_table_definition());
        assert!(!DbError::UnsupportedType("double".into()).is_invalid_table_definition());
    }
}
