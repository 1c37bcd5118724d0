use std::fmt;
use std::sync::Arc;

use crate::data_type::DataType;

/// Represents a single cell value stored in a table.
///
/// Values coming from a command line are raw text; they are coerced to the
/// declared type of their column on insert (see [Value::coerce]).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// represents an empty or missing value.
    Null,
    /// A 64-bit signed integer value.
    Int(i64),
    /// A UTF-8 string value, wrapped in an [Arc] for cheap cloning.
    Text(Arc<str>),
}

impl Value {
    /// Returns `true` if the value is [Value::Null].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the inner integer value if this is a [Value::Int].
    /// Otherwise, returns `None`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns a reference to the inner string slice if this is a [Value::Text].
    /// Otherwise, returns `None`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the [DataType] matching this value, `None` for [Value::Null].
    pub fn data_type(&self) -> Option<DataType> {
        match self {
            Self::Null => None,
            Self::Int(_) => Some(DataType::Int),
            Self::Text(_) => Some(DataType::Varchar),
        }
    }

    /// Converts the value to the given column type.
    ///
    /// - `int`: numeric text (`"12"`, `"2.7"`, `"1e3"`) is truncated towards
    ///   zero, other text is read as a leading integer, anything non-numeric
    ///   gives `0`.
    /// - `varchar`: integers are stringified.
    /// - `Null` stays `Null`.
    ///
    /// # Example
    /// ```
    /// # use linedb::{DataType, Value};
    /// assert_eq!(Value::from("6").coerce(DataType::Int), Value::Int(6));
    /// assert_eq!(Value::from("1e3").coerce(DataType::Int), Value::Int(1000));
    /// assert_eq!(Value::from("non-numeric").coerce(DataType::Int), Value::Int(0));
    /// assert_eq!(Value::Int(123).coerce(DataType::Varchar), Value::from("123"));
    /// ```
    pub fn coerce(&self, data_type: DataType) -> Value {
        match (self, data_type) {
            (Self::Null, _) => Self::Null,
            (Self::Int(i), DataType::Int) => Self::Int(*i),
            (Self::Text(s), DataType::Int) => Self::Int(parse_int(s)),
            (Self::Int(i), DataType::Varchar) => Self::Text(i.to_string().into()),
            (Self::Text(s), DataType::Varchar) => Self::Text(Arc::clone(s)),
        }
    }

    /// Compares a stored value with the raw text of a `where` predicate.
    ///
    /// Integers match when the text reads as the same number, text matches
    /// byte for byte and `NULL` never matches.
    pub fn loosely_equals(&self, raw: &str) -> bool {
        match self {
            Self::Null => false,
            Self::Text(s) => s.as_ref() == raw,
            Self::Int(n) => {
                let raw = raw.trim();
                if let Ok(i) = raw.parse::<i64>() {
                    i == *n
                } else if let Ok(f) = raw.parse::<f64>() {
                    f == *n as f64
                } else {
                    false
                }
            }
        }
    }
}

/// Reads text as an integer. A whole numeric literal, exponent and fraction
/// included, converts with truncation; other text falls back to its leading
/// digits. Out-of-range values saturate.
fn parse_int(raw: &str) -> i64 {
    let s = raw.trim();
    if let Ok(i) = s.parse::<i64>() {
        return i;
    }
    if is_numeric_literal(s) {
        if let Ok(f) = s.parse::<f64>() {
            // `as` truncates and saturates
            return f as i64;
        }
    }
    parse_leading_int(s)
}

/// Digits, signs, a point and an exponent marker only. Keeps `inf` and `nan`,
/// which `f64::from_str` accepts, out of the float path.
fn is_numeric_literal(s: &str) -> bool {
    s.bytes().any(|b| b.is_ascii_digit())
        && s
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
}

/// Reads an optional sign followed by leading digits, ignoring the rest.
/// No digit at all yields `0`, overflow saturates.
fn parse_leading_int(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, b| {
            let digit = i64::from(b - b'0');
            if negative {
                acc.saturating_mul(10).saturating_sub(digit)
            } else {
                acc.saturating_mul(10).saturating_add(digit)
            }
        })
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ─────────────────────────────────────────────────────────────
    // Test 1 : accessors
    // ─────────────────────────────────────────────────────────────
    #[test]
    fn test_accessors() {
        assert!(Value::Null.is_null());
        assert!(!Value::Int(1).is_null());
        assert_eq!(Value::Int(42).as_int(), Some(42));
        assert_eq!(Value::from("42").as_int(), None);
        assert_eq!(Value::from("hello").as_str(), Some("hello"));
        assert_eq!(Value::Int(1).as_str(), None);
    }

    #[test]
    fn test_data_type() {
        assert_eq!(Value::Null.data_type(), None);
        assert_eq!(Value::Int(1).data_type(), Some(DataType::Int));
        assert_eq!(Value::from("x").data_type(), Some(DataType::Varchar));
    }

    // ─────────────────────────────────────────────────────────────
    // Test 2 : int coercion
    // ─────────────────────────────────────────────────────────────
    #[test]
    fn test_coerce_to_int() {
        assert_eq!(Value::from("6").coerce(DataType::Int), Value::Int(6));
        assert_eq!(Value::from("  -17").coerce(DataType::Int), Value::Int(-17));
        assert_eq!(Value::from("+3").coerce(DataType::Int), Value::Int(3));
        assert_eq!(Value::from("12abc").coerce(DataType::Int), Value::Int(12));
        assert_eq!(Value::from("1e3").coerce(DataType::Int), Value::Int(1000));
        assert_eq!(Value::from("1.9e1").coerce(DataType::Int), Value::Int(19));
        assert_eq!(Value::from(" 2.7 ").coerce(DataType::Int), Value::Int(2));
        assert_eq!(Value::from("-2.7").coerce(DataType::Int), Value::Int(-2));
        assert_eq!(Value::from("inf").coerce(DataType::Int), Value::Int(0));
        assert_eq!(Value::from("nan").coerce(DataType::Int), Value::Int(0));
        assert_eq!(Value::from("1e").coerce(DataType::Int), Value::Int(1));
        assert_eq!(
            Value::from("non-numeric string").coerce(DataType::Int),
            Value::Int(0)
        );
        assert_eq!(Value::from("").coerce(DataType::Int), Value::Int(0));
        assert_eq!(Value::from("-").coerce(DataType::Int), Value::Int(0));
        assert_eq!(Value::Null.coerce(DataType::Int), Value::Null);
    }

    #[test]
    fn test_coerce_int_saturates() {
        assert_eq!(
            Value::from("99999999999999999999999").coerce(DataType::Int),
            Value::Int(i64::MAX)
        );
        assert_eq!(
            Value::from("-99999999999999999999999").coerce(DataType::Int),
            Value::Int(i64::MIN)
        );
        assert_eq!(Value::from("1e30").coerce(DataType::Int), Value::Int(i64::MAX));
    }

    #[test]
    fn test_coerced_int_matches_its_literal() {
        for literal in ["1e3", "2.7", "-17"] {
            let stored = Value::from(literal).coerce(DataType::Int);
            assert!(
                stored.loosely_equals(&stored.to_string()),
                "{literal} stored as {stored}"
            );
        }
        assert!(Value::from("1e3").coerce(DataType::Int).loosely_equals("1e3"));
    }

    // ─────────────────────────────────────────────────────────────
    // Test 3 : varchar coercion
    // ─────────────────────────────────────────────────────────────
    #[test]
    fn test_coerce_to_varchar() {
        assert_eq!(Value::Int(123).coerce(DataType::Varchar), Value::from("123"));
        assert_eq!(
            Value::from("John").coerce(DataType::Varchar),
            Value::from("John")
        );
        assert_eq!(Value::Null.coerce(DataType::Varchar), Value::Null);
    }

    // ─────────────────────────────────────────────────────────────
    // Test 4 : loose equality
    // ─────────────────────────────────────────────────────────────
    #[test]
    fn test_loosely_equals() {
        assert!(Value::Int(6).loosely_equals("6"));
        assert!(Value::Int(6).loosely_equals(" 6 "));
        assert!(Value::Int(6).loosely_equals("6.0"));
        assert!(!Value::Int(6).loosely_equals("7"));
        assert!(!Value::Int(0).loosely_equals("abc"));

        assert!(Value::from("John").loosely_equals("John"));
        assert!(!Value::from("John").loosely_equals("john"));

        assert!(!Value::Null.loosely_equals(""));
        assert!(!Value::Null.loosely_equals("NULL"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Null.to_string(), "NULL");
        assert_eq!(Value::Int(-4).to_string(), "-4");
        assert_eq!(Value::from("Jill").to_string(), "Jill");
    }
}
