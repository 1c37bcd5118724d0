use std::fmt;
use std::str::FromStr;

use crate::error::DbError;

/// Represents the supported data types in a table schema.
/// Any other type token is rejected when the table is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// A 64-bit signed integer, declared as `int`.
    Int,
    /// A variable-length UTF-8 string, declared as `varchar`.
    Varchar,
}

impl FromStr for DataType {
    type Err = DbError;

    /// Type tokens are matched case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("int") {
            Ok(Self::Int)
        } else if s.eq_ignore_ascii_case("varchar") {
            Ok(Self::Varchar)
        } else {
            Err(DbError::UnsupportedType(s.to_string()))
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => f.write_str("int"),
            Self::Varchar => f.write_str("varchar"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_data_type() {
        assert_eq!("int".parse::<DataType>(), Ok(DataType::Int));
        assert_eq!("VARCHAR".parse::<DataType>(), Ok(DataType::Varchar));
        assert_eq!(
            "double".parse::<DataType>(),
            Err(DbError::UnsupportedType("double".into()))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(DataType::Int.to_string(), "int");
        assert_eq!(DataType::Varchar.to_string(), "varchar");
    }
}
